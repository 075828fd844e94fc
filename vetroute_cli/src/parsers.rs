use jiff::{ToSpan, Zoned, civil::Date};

pub fn parse_date(input: &str) -> Result<Date, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "today" => return Ok(Zoned::now().date()),
        "tomorrow" => {
            return Zoned::now()
                .date()
                .checked_add(1.day())
                .map_err(|error| error.to_string());
        }
        _ => {}
    }

    input
        .trim()
        .parse::<Date>()
        .map_err(|_| String::from("Invalid date, expected YYYY-MM-DD, today or tomorrow"))
}
