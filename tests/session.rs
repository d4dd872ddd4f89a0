#[cfg(test)]
mod tests {
    use punchcard::libs::session::{Outcome, Session};
    use std::io::Cursor;

    fn run(input: &str) -> Outcome {
        Session::new(Cursor::new(input)).run().unwrap()
    }

    #[test]
    fn test_sentinel_terminates_the_program() {
        assert_eq!(run("1:00pm-1:00pm\n"), Outcome::Sentinel);
    }

    #[test]
    fn test_sentinel_needs_all_three_fields_equal() {
        // Same hour and minute but different meridiem is a real interval,
        // so the session runs on to the end of input.
        assert_eq!(run("1:00pm-1:00am\n"), Outcome::EndOfInput);
    }

    #[test]
    fn test_end_of_input_terminates_cleanly() {
        assert_eq!(run(""), Outcome::EndOfInput);
        assert_eq!(run("9:00am-5:00pm\n"), Outcome::EndOfInput);
        assert_eq!(run("9:00am-5:00pm"), Outcome::EndOfInput);
    }

    #[test]
    fn test_multiple_intervals_single_day() {
        let input = "9:00am-1:00pm, 2:00pm-4:30pm, 6:10pm-9:20pm\n";
        assert_eq!(run(input), Outcome::EndOfInput);
    }

    #[test]
    fn test_multiple_days_then_sentinel() {
        let input = "9:00am-5:00pm\n8:30am-12:45pm, 1:30pm-5:00pm\n1:00pm-1:00pm\n";
        assert_eq!(run(input), Outcome::Sentinel);
    }

    #[test]
    fn test_malformed_entry_recovers() {
        // The bad first line is diagnosed and discarded; the session still
        // reaches the sentinel on the next line.
        assert_eq!(run("13:00pm-2:00pm\n1:00pm-1:00pm\n"), Outcome::Sentinel);
        assert_eq!(run("nonsense\n1:00pm-1:00pm\n"), Outcome::Sentinel);
    }

    #[test]
    fn test_missing_separator_recovers() {
        assert_eq!(run("9:00am 5:00pm\n2:00pm-2:00pm\n"), Outcome::Sentinel);
    }

    #[test]
    fn test_junk_before_separator_is_skipped() {
        assert_eq!(run("9:00am to -5:00pm\n"), Outcome::EndOfInput);
    }

    #[test]
    fn test_truncated_entry_terminates() {
        assert_eq!(run("9:00am-5:0"), Outcome::EndOfInput);
        assert_eq!(run("9:00am-"), Outcome::EndOfInput);
    }
}
