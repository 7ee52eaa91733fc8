//! Static array declaration rendering.
//!
//! Produces the generated source file: an attribution doc comment followed by
//! a fixed-size array of `(longitude, latitude)` tuples.
//!
//! ```text
//! /// [Source data](http://www.gnuplotting.org/plotting-the-world-revisited)
//!
//! pub static WORLD_HIGH_RESOLUTION: [(f64, f64); 2] = [
//!     (1.0, 2.0),
//!     (3.5, -4.25),
//! ];
//! ```

use std::fmt;

use crate::table::RecordTable;

/// Citation for the gnuplotting world coastline data set.
pub const DEFAULT_ATTRIBUTION: &str =
    "[Source data](http://www.gnuplotting.org/plotting-the-world-revisited)";

/// Identifier the map shape module imports.
pub const DEFAULT_IDENTIFIER: &str = "WORLD_HIGH_RESOLUTION";

const ENTRY_INDENT: &str = "    ";

/// Visibility of the generated static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `pub`
    #[default]
    Public,
    /// `pub(crate)`
    Crate,
    /// No visibility qualifier
    Private,
}

impl Visibility {
    /// Declaration prefix including the trailing space, empty for private.
    pub fn prefix(&self) -> &'static str {
        match self {
            Visibility::Public => "pub ",
            Visibility::Crate => "pub(crate) ",
            Visibility::Private => "",
        }
    }
}

/// Element type of both tuple fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatType {
    F32,
    #[default]
    F64,
}

impl FloatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatType::F32 => "f32",
            FloatType::F64 => "f64",
        }
    }
}

impl fmt::Display for FloatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of the generated declaration.
///
/// The defaults reproduce the table the world map widget expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Text of the `///` comment line preceding the declaration.
    pub attribution: String,

    /// Visibility of the static.
    pub visibility: Visibility,

    /// Name of the static.
    pub identifier: String,

    /// Tuple element type.
    pub float_type: FloatType,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            visibility: Visibility::default(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            float_type: FloatType::default(),
        }
    }
}

impl RenderConfig {
    /// Set the attribution comment text.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Set the static's visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the static's identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Set the tuple element type.
    pub fn with_float_type(mut self, float_type: FloatType) -> Self {
        self.float_type = float_type;
        self
    }

    /// Declaration line for an array of `len` entries, without trailing newline.
    fn declaration(&self, len: usize) -> String {
        format!(
            "{}static {}: [({ty}, {ty}); {}] = [",
            self.visibility.prefix(),
            self.identifier,
            len,
            ty = self.float_type,
        )
    }
}

/// Generated source text, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    text: String,
    entries: usize,
}

impl OutputDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Declared array length (equal to the number of emitted entries).
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a record table as a static array declaration.
///
/// The declared length and the entry list are both taken from `table`, so
/// they always agree. Entries keep table order and reproduce the literal
/// token text.
pub fn render(table: &RecordTable<'_>, config: &RenderConfig) -> OutputDocument {
    let entries = table.len();

    let mut text = String::with_capacity(128 + entries * 32);
    text.push_str("/// ");
    text.push_str(&config.attribution);
    text.push_str("\n\n");
    text.push_str(&config.declaration(entries));
    text.push('\n');

    for pair in table {
        text.push_str(ENTRY_INDENT);
        text.push('(');
        text.push_str(pair.longitude);
        text.push_str(", ");
        text.push_str(pair.latitude);
        text.push_str("),\n");
    }

    text.push_str("];\n");

    OutputDocument { text, entries }
}
