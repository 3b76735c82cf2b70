use std::fmt::Display;

/// The character sets an EPC record may declare in row 3.
///
/// The discriminant is the code written to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8 = 1,
    Iso8859_1 = 2,
    Iso8859_2 = 3,
    Iso8859_4 = 4,
    Iso8859_5 = 5,
    Iso8859_7 = 6,
    Iso8859_10 = 7,
    Iso8859_15 = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{character:?} cannot be represented in {encoding}")]
pub struct Unencodable {
    pub encoding: &'static str,
    pub character: char,
}

impl Encoding {
    pub const ALL: [Encoding; 8] = [
        Encoding::Utf8,
        Encoding::Iso8859_1,
        Encoding::Iso8859_2,
        Encoding::Iso8859_4,
        Encoding::Iso8859_5,
        Encoding::Iso8859_7,
        Encoding::Iso8859_10,
        Encoding::Iso8859_15,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        let idx = usize::from(code).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Iso8859_1 => "ISO-8859-1",
            Encoding::Iso8859_2 => "ISO-8859-2",
            Encoding::Iso8859_4 => "ISO-8859-4",
            Encoding::Iso8859_5 => "ISO-8859-5",
            Encoding::Iso8859_7 => "ISO-8859-7",
            Encoding::Iso8859_10 => "ISO-8859-10",
            Encoding::Iso8859_15 => "ISO-8859-15",
        }
    }

    /// Encode `text` in this character set.
    ///
    /// Characters the set cannot represent are an error, nothing is replaced.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, Unencodable> {
        let charset = match self {
            Encoding::Utf8 => return Ok(text.as_bytes().to_vec()),
            // encoding_rs only knows the windows-1252 superset under this label
            Encoding::Iso8859_1 => return self.encode_latin1(text),
            Encoding::Iso8859_2 => encoding_rs::ISO_8859_2,
            Encoding::Iso8859_4 => encoding_rs::ISO_8859_4,
            Encoding::Iso8859_5 => encoding_rs::ISO_8859_5,
            Encoding::Iso8859_7 => encoding_rs::ISO_8859_7,
            Encoding::Iso8859_10 => encoding_rs::ISO_8859_10,
            Encoding::Iso8859_15 => encoding_rs::ISO_8859_15,
        };
        let (bytes, _, had_errors) = charset.encode(text);
        if !had_errors {
            return Ok(bytes.into_owned());
        }
        let mut buf = [0u8; 4];
        let character = text
            .chars()
            .find(|c| charset.encode(c.encode_utf8(&mut buf)).2)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(Unencodable {
            encoding: self.name(),
            character,
        })
    }

    fn encode_latin1(&self, text: &str) -> Result<Vec<u8>, Unencodable> {
        text.chars()
            .map(|c| {
                u8::try_from(c).map_err(|_| Unencodable {
                    encoding: self.name(),
                    character: c,
                })
            })
            .collect()
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
