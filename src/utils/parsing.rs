/// Parsing of the /add command text
///
/// The message must consist of exactly five whitespace-separated tokens:
/// `/add <name> <day> <month> <year>`. The first token is the command itself
/// and is not inspected, so `/add@botname` works in group chats. Day, month
/// and year are only required to be integers; range checks against the
/// calendar are intentionally not performed.

/// Parsed arguments of a well-formed /add command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddArgs {
    pub name: String,
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// Error for /add text that does not match the expected format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadAddFormat;

impl std::fmt::Display for BadAddFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected /add <name> <day> <month> <year>")
    }
}

impl std::error::Error for BadAddFormat {}

/// Split the raw message text into /add arguments
pub fn parse_add_command(text: &str) -> Result<AddArgs, BadAddFormat> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [_, name, day, month, year] = tokens.as_slice() else {
        return Err(BadAddFormat);
    };

    let day = day.parse::<i32>().map_err(|_| BadAddFormat)?;
    let month = month.parse::<i32>().map_err(|_| BadAddFormat)?;
    let year = year.parse::<i32>().map_err(|_| BadAddFormat)?;

    Ok(AddArgs {
        name: (*name).to_string(),
        day,
        month,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_command() {
        assert_eq!(
            parse_add_command("/add Анна 15 7 1990"),
            Ok(AddArgs {
                name: "Анна".to_string(),
                day: 15,
                month: 7,
                year: 1990,
            })
        );
    }

    #[test]
    fn test_parse_mentioned_command() {
        // In group chats the command arrives as /add@botname
        let args = parse_add_command("/add@bdaybot Анна 15 7 1990").expect("valid");
        assert_eq!(args.name, "Анна");
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(parse_add_command("/add"), Err(BadAddFormat));
        assert_eq!(parse_add_command("/add Анна"), Err(BadAddFormat));
        assert_eq!(parse_add_command("/add Анна 15 7"), Err(BadAddFormat));
        assert_eq!(parse_add_command("/add Анна Мария 15 7 1990"), Err(BadAddFormat));
        assert_eq!(parse_add_command(""), Err(BadAddFormat));
    }

    #[test]
    fn test_parse_non_integer_fields() {
        assert_eq!(parse_add_command("/add Анна fifteen 7 1990"), Err(BadAddFormat));
        assert_eq!(parse_add_command("/add Анна 15 июль 1990"), Err(BadAddFormat));
        assert_eq!(parse_add_command("/add Анна 15 7 199O"), Err(BadAddFormat));
    }

    #[test]
    fn test_parse_does_not_range_check() {
        // 31 February is accepted at parse time; matching simply never fires
        let args = parse_add_command("/add Тест 31 2 2000").expect("valid");
        assert_eq!((args.day, args.month), (31, 2));
    }
}
