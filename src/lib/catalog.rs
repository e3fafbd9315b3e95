//! Encoding catalogs walked by the generator.
//!
//! Each single-byte code page is described by its name, the codec that
//! decodes it and the byte ranges to probe. Unicode formats carry their own
//! encoder, decoder and byte-order mark. Adding an encoding means adding an
//! entry to one of the tables below; the generator never names encodings.

use std::fmt;
use std::ops::RangeInclusive;

use encoding_rs::Encoding;

/// Decodes a single byte of a single-byte code page.
///
/// `None` means the byte is unassigned in that code page. That is an
/// expected outcome of probing, not a failure.
pub trait ByteDecoder {
    fn decode_byte(&self, byte: u8) -> Option<char>;
}

/// Windows code pages decoded through the WHATWG tables of `encoding_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowsPage {
    Cp1250,
    Cp1251,
    Cp1252,
    Cp1253,
    Cp1254,
    Cp1255,
    Cp1256,
    Cp1257,
    Cp1258,
}

impl WindowsPage {
    pub fn encoding(self) -> &'static Encoding {
        match self {
            WindowsPage::Cp1250 => encoding_rs::WINDOWS_1250,
            WindowsPage::Cp1251 => encoding_rs::WINDOWS_1251,
            WindowsPage::Cp1252 => encoding_rs::WINDOWS_1252,
            WindowsPage::Cp1253 => encoding_rs::WINDOWS_1253,
            WindowsPage::Cp1254 => encoding_rs::WINDOWS_1254,
            WindowsPage::Cp1255 => encoding_rs::WINDOWS_1255,
            WindowsPage::Cp1256 => encoding_rs::WINDOWS_1256,
            WindowsPage::Cp1257 => encoding_rs::WINDOWS_1257,
            WindowsPage::Cp1258 => encoding_rs::WINDOWS_1258,
        }
    }

    /// Slots outside `0x80..=0x9F` that WHATWG assigns but the code page
    /// itself leaves undefined.
    pub fn unassigned(self) -> &'static [u8] {
        match self {
            // WHATWG maps 0xCA to U+05BA HEBREW POINT HOLAM HASER FOR VAV
            WindowsPage::Cp1255 => &[0xCA],
            _ => &[],
        }
    }
}

/// Codec capability of a single-byte code page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// 7-bit ASCII: bytes `0x80..=0xFF` are undecodable.
    Ascii,
    /// ISO-8859-1: every byte maps to the codepoint of the same value.
    Latin1,
    /// A Windows code page with strict semantics.
    Windows(WindowsPage),
}

impl ByteDecoder for Codec {
    fn decode_byte(&self, byte: u8) -> Option<char> {
        match self {
            Codec::Ascii => byte.is_ascii().then_some(char::from(byte)),
            Codec::Latin1 => Some(char::from(byte)),
            Codec::Windows(page) => {
                if page.unassigned().contains(&byte) {
                    return None;
                }
                let input = [byte];
                let decoded = page
                    .encoding()
                    .decode_without_bom_handling_and_without_replacement(&input)?;
                let mut chars = decoded.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                // WHATWG passes the unassigned 0x80..=0x9F slots through as C1
                // controls; the code pages themselves leave them undefined.
                if (0x80..=0x9F).contains(&byte) && u32::from(ch) == u32::from(byte) {
                    return None;
                }
                Some(ch)
            }
        }
    }
}

/// Which byte values a code page is probed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Every byte `0x00..=0xFF`, skipping the ones that fail to decode.
    Exhaustive,
    /// Only the listed ranges, in order.
    Ranges(&'static [RangeInclusive<u8>]),
}

impl Probe {
    /// Byte values to probe, in fixture order.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Probe::Exhaustive => (0..=u8::MAX).collect(),
            Probe::Ranges(ranges) => ranges.iter().flat_map(|r| r.clone()).collect(),
        }
    }
}

/// A single-byte code page entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePage {
    /// Codec name, used as the manifest key and fixture file stem.
    pub name: &'static str,
    pub codec: Codec,
    pub probe: Probe,
}

impl ByteDecoder for CodePage {
    fn decode_byte(&self, byte: u8) -> Option<char> {
        self.codec.decode_byte(byte)
    }
}

const fn exhaustive(name: &'static str, codec: Codec) -> CodePage {
    CodePage {
        name,
        codec,
        probe: Probe::Exhaustive,
    }
}

/// Single-byte code pages, in generation order.
pub const SINGLE_BYTE_CATALOG: &[CodePage] = &[
    exhaustive("ascii", Codec::Ascii),
    exhaustive("cp1250", Codec::Windows(WindowsPage::Cp1250)),
    exhaustive("cp1251", Codec::Windows(WindowsPage::Cp1251)),
    exhaustive("cp1252", Codec::Windows(WindowsPage::Cp1252)),
    exhaustive("cp1253", Codec::Windows(WindowsPage::Cp1253)),
    exhaustive("cp1254", Codec::Windows(WindowsPage::Cp1254)),
    exhaustive("cp1255", Codec::Windows(WindowsPage::Cp1255)),
    exhaustive("cp1256", Codec::Windows(WindowsPage::Cp1256)),
    exhaustive("cp1257", Codec::Windows(WindowsPage::Cp1257)),
    exhaustive("cp1258", Codec::Windows(WindowsPage::Cp1258)),
];

const LATIN1_PRINTABLE: &[RangeInclusive<u8>] = &[0x20..=0x7E, 0xA0..=0xFF];

/// Latin-1 is probed over its printable ranges only; the C0 and C1 control
/// ranges are never visited.
pub const LEGACY_LATIN1: CodePage = CodePage {
    name: "latin1",
    codec: Codec::Latin1,
    probe: Probe::Ranges(LATIN1_PRINTABLE),
};

/// Unicode transformation formats with explicit width and byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicodeFormat {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

/// Unicode formats, in generation order.
pub const UNICODE_CATALOG: &[UnicodeFormat] = &[
    UnicodeFormat::Utf8,
    UnicodeFormat::Utf16Le,
    UnicodeFormat::Utf16Be,
    UnicodeFormat::Utf32Le,
    UnicodeFormat::Utf32Be,
];

impl fmt::Display for UnicodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl UnicodeFormat {
    /// Codec name with `_` separators, e.g. `utf_16_le`.
    pub fn name(self) -> &'static str {
        match self {
            UnicodeFormat::Utf8 => "utf_8",
            UnicodeFormat::Utf16Le => "utf_16_le",
            UnicodeFormat::Utf16Be => "utf_16_be",
            UnicodeFormat::Utf32Le => "utf_32_le",
            UnicodeFormat::Utf32Be => "utf_32_be",
        }
    }

    /// Fixture file stem: the name with separators removed, e.g. `utf16le`.
    pub fn file_stem(self) -> String {
        self.name().replace('_', "")
    }

    /// The byte-order mark of this format.
    pub fn bom(self) -> &'static [u8] {
        match self {
            UnicodeFormat::Utf8 => &[0xEF, 0xBB, 0xBF],
            UnicodeFormat::Utf16Le => &[0xFF, 0xFE],
            UnicodeFormat::Utf16Be => &[0xFE, 0xFF],
            UnicodeFormat::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            UnicodeFormat::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
        }
    }

    /// Code unit width in bytes.
    pub fn unit_width(self) -> usize {
        match self {
            UnicodeFormat::Utf8 => 1,
            UnicodeFormat::Utf16Le | UnicodeFormat::Utf16Be => 2,
            UnicodeFormat::Utf32Le | UnicodeFormat::Utf32Be => 4,
        }
    }

    /// Encode `text` without a byte-order mark.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            UnicodeFormat::Utf8 => text.as_bytes().to_vec(),
            UnicodeFormat::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            UnicodeFormat::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            UnicodeFormat::Utf32Le => text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect(),
            UnicodeFormat::Utf32Be => text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect(),
        }
    }

    /// Strictly decode `bytes`, which must not start with a byte-order mark.
    ///
    /// Returns `None` on any malformed or truncated sequence.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        let encoding = match self {
            UnicodeFormat::Utf8 => encoding_rs::UTF_8,
            UnicodeFormat::Utf16Le => encoding_rs::UTF_16LE,
            UnicodeFormat::Utf16Be => encoding_rs::UTF_16BE,
            UnicodeFormat::Utf32Le => return decode_utf32(bytes, u32::from_le_bytes),
            UnicodeFormat::Utf32Be => return decode_utf32(bytes, u32::from_be_bytes),
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
    }

    /// Decode `bytes`, stripping a leading byte-order mark if one is present.
    pub fn decode_with_bom(self, bytes: &[u8]) -> Option<String> {
        self.decode(bytes.strip_prefix(self.bom()).unwrap_or(bytes))
    }
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> Option<String> {
    let chunks = bytes.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return None;
    }
    chunks
        .map(|c| char::from_u32(unit([c[0], c[1], c[2], c[3]])))
        .collect()
}
