//! Primitive value reader over the text of one line.

use super::Loc;
use crate::error::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// Reads whitespace-separated fields from a single line, left to right.
pub(super) struct Fields<'a> {
    loc: Loc<'a>,
    text: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    pub(super) fn new(loc: Loc<'a>, text: &'a str) -> Self {
        Fields { loc, text, pos: 0 }
    }

    pub(super) fn loc(&self) -> Loc<'a> {
        self.loc
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// True when only whitespace remains.
    pub(super) fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.text.len()
    }

    /// Next run of non-whitespace characters; empty at end of line.
    pub(super) fn read_word(&mut self) -> &'a str {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn read_required_word(&mut self, field: &str) -> Result<&'a str, ParseError> {
        let word = self.read_word();
        if word.is_empty() {
            return Err(self.loc.err(format!("Missing value for the {}", field)));
        }
        Ok(word)
    }

    /// A quoted string (quotes removed) or a bare word.
    pub(super) fn read_string(&mut self, field: &str) -> Result<String, ParseError> {
        self.skip_whitespace();
        let rest = self.rest();
        if let Some(quoted) = rest.strip_prefix('"') {
            let close = quoted.find('"').ok_or_else(|| {
                self.loc
                    .err(format!("{}: missing closing quote", field))
                    .with_text(rest)
            })?;
            self.pos += close + 2;
            return Ok(quoted[..close].to_owned());
        }
        self.read_required_word(field).map(str::to_owned)
    }

    pub(super) fn read_int(&mut self, field: &str) -> Result<i32, ParseError> {
        let word = self.read_required_word(field)?;
        word.parse::<i32>().map_err(|_| {
            self.loc
                .err(format!("{}: \"{}\" is not a valid integer", field, word))
                .with_text(word)
        })
    }

    pub(super) fn read_double(&mut self, field: &str) -> Result<f64, ParseError> {
        let word = self.read_required_word(field)?;
        match word.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self
                .loc
                .err(format!("{}: \"{}\" is not a valid number", field, word))
                .with_text(word)),
        }
    }

    /// Integer that must be = or > 0.
    pub(super) fn read_non_negative(&mut self, field: &str) -> Result<u32, ParseError> {
        let value = self.read_int(field)?;
        u32::try_from(value).map_err(|_| {
            self.loc
                .err(format!("{}: {} is not valid; value must be = or > 0", field, value))
                .with_text(value.to_string())
        })
    }

    /// Integer that must be > 0.
    pub(super) fn read_positive(&mut self, field: &str) -> Result<u32, ParseError> {
        let value = self.read_int(field)?;
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(self
                .loc
                .err(format!("{}: {} is not valid; value must be > 0", field, value))
                .with_text(value.to_string())),
        }
    }

    /// A word converted with its `FromStr` impl; the conversion error's
    /// message is reported.
    pub(super) fn read_parsed<T>(&mut self, field: &str) -> Result<T, ParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let word = self.read_required_word(field)?;
        word.parse::<T>().map_err(|e| {
            self.loc
                .err(format!("{}: \"{}\" is not valid. {}", field, word, e))
                .with_text(word)
        })
    }

    /// Fail if anything but whitespace follows the fields read so far.
    pub(super) fn check_no_data_after(&mut self, context: &str) -> Result<(), ParseError> {
        if self.at_end() {
            return Ok(());
        }
        let extra = self.rest();
        Err(self
            .loc
            .err(format!("Found extra data after {}: \"{}\"", context, extra))
            .with_text(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(text: &str) -> Fields<'_> {
        Fields::new(Loc { file: "t.txt", line: 7 }, text)
    }

    #[test]
    fn reads_typed_fields_in_order() {
        let mut f = fields("  abiebals   0.5  12 ");
        assert_eq!(f.read_string("Species").unwrap(), "abiebals");
        assert_eq!(f.read_double("Fuel Coefficient").unwrap(), 0.5);
        assert_eq!(f.read_int("Age").unwrap(), 12);
        assert!(f.at_end());
        assert_eq!(f.read_word(), "");
    }

    #[test]
    fn quoted_string_keeps_spaces() {
        let mut f = fields("\"Dynamic Fuel System\" next");
        assert_eq!(f.read_string("LandisData").unwrap(), "Dynamic Fuel System");
        assert_eq!(f.read_word(), "next");
    }

    #[test]
    fn unterminated_quote_fails() {
        let err = fields("\"fuels/{timestep}.img").read_string("MapFileNames").unwrap_err();
        assert!(err.message.contains("missing closing quote"), "{}", err.message);
        assert_eq!(err.line, 7);
    }

    #[test]
    fn bad_integer_carries_literal_and_field() {
        let err = fields("12x").read_int("Fuel Index").unwrap_err();
        assert_eq!(err.message, "Fuel Index: \"12x\" is not a valid integer");
        assert_eq!(err.text.as_deref(), Some("12x"));
        assert_eq!(err.file, "t.txt");
    }

    #[test]
    fn bad_double_and_non_finite_fail() {
        assert!(fields("abc").read_double("Fuel Coefficient").is_err());
        assert!(fields("NaN").read_double("Fuel Coefficient").is_err());
        assert!(fields("inf").read_double("Fuel Coefficient").is_err());
        assert_eq!(fields("-1e-2").read_double("Fuel Coefficient").unwrap(), -0.01);
    }

    #[test]
    fn missing_value_is_reported() {
        let err = fields("   ").read_int("Max Age").unwrap_err();
        assert_eq!(err.message, "Missing value for the Max Age");
    }

    #[test]
    fn range_checked_integers() {
        assert_eq!(fields("0").read_non_negative("Min Age").unwrap(), 0);
        assert!(fields("-1").read_non_negative("Min Age").is_err());
        assert!(fields("0").read_positive("Timestep").is_err());
        assert_eq!(fields("5").read_positive("Timestep").unwrap(), 5);
    }

    #[test]
    fn trailing_data_names_the_context() {
        let mut f = fields("abiebals 0.5 extra stuff");
        f.read_string("Species").unwrap();
        f.read_double("Fuel Coefficient").unwrap();
        let err = f
            .check_no_data_after("the Fuel Coefficient column")
            .unwrap_err();
        assert_eq!(
            err.message,
            "Found extra data after the Fuel Coefficient column: \"extra stuff\""
        );
        assert_eq!(err.text.as_deref(), Some("extra stuff"));
    }
}
