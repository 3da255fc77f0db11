//! Declarative descriptions of expected tree shapes.
//!
//! A [`SchemaNode`] describes the expected shape of one tag: its kind, its
//! name inside the enclosing compound, behavioral [`SchemaOptions`], and
//! kind-specific constraints (an exact array length, the field set of a
//! compound, the element schema of a list). Schema trees are authored once,
//! typically as a static description of a document format, and treated as
//! immutable thereafter; one schema tree may serve many concurrent
//! [`verify`](crate::verify) calls.
//!
//! Authoring mistakes are rejected when the schema is built, not when data
//! is checked: duplicate field names, empty field names without unnamed
//! matching, and options that do not apply to the node's kind all fail the
//! constructor.
//!
//! # Example
//!
//! ```
//! use nbt_schema::{SchemaNode, SchemaOptions, verify};
//!
//! let schema = SchemaNode::compound(
//!     "entity",
//!     vec![
//!         SchemaNode::double_array("pos", 3),
//!         SchemaNode::string("id"),
//!         SchemaNode::int("ttl").with_options(SchemaOptions::new().optional()).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let default = schema.build_default_tree();
//! assert!(verify(&default, &schema).is_ok());
//! ```

use crate::{
    ByteArray, Compound, DoubleArray, Error, IntArray, List, LongArray, Result, Tag, Value,
};

/// Behavioral options attached to a [`SchemaNode`].
///
/// Options are named booleans rather than bit flags, so a combination that
/// does not apply to a node's kind is rejected by
/// [`SchemaNode::with_options`] instead of surfacing at verification time.
///
/// # Example
///
/// ```
/// use nbt_schema::SchemaOptions;
///
/// let options = SchemaOptions::new().optional().match_unnamed();
/// assert!(options.optional);
/// assert!(options.match_unnamed);
/// assert!(!options.allow_extra);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// The entry may be absent from the enclosing compound.
    pub optional: bool,
    /// When the named entry is absent, an entry under the empty name may
    /// satisfy this node.
    pub match_unnamed: bool,
    /// The compound may contain entries the schema does not declare.
    /// Compound schemas only.
    pub allow_extra: bool,
    /// Elements whose kind differs from the declared element schema are
    /// tolerated and not descended into. List schemas only.
    pub lenient_elements: bool,
    /// The list must contain at least one element. List schemas only.
    pub require_nonempty: bool,
}

impl SchemaOptions {
    pub const fn new() -> Self {
        Self {
            optional: false,
            match_unnamed: false,
            allow_extra: false,
            lenient_elements: false,
            require_nonempty: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn match_unnamed(mut self) -> Self {
        self.match_unnamed = true;
        self
    }

    pub const fn allow_extra(mut self) -> Self {
        self.allow_extra = true;
        self
    }

    pub const fn lenient_elements(mut self) -> Self {
        self.lenient_elements = true;
        self
    }

    pub const fn require_nonempty(mut self) -> Self {
        self.require_nonempty = true;
        self
    }
}

/// The kind-specific constraint of a [`SchemaNode`].
///
/// For array shapes, `length == 0` means unconstrained; any positive value
/// is an exact-match requirement.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    ByteArray { length: usize },
    IntArray { length: usize },
    LongArray { length: usize },
    DoubleArray { length: usize },
    List { element: Box<SchemaNode> },
    Compound { fields: Vec<SchemaNode> },
}

/// A declarative descriptor of the expected shape of one tag node and,
/// recursively, its children.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
    name: String,
    options: SchemaOptions,
    shape: Shape,
}

macro_rules! scalar_constructor {
    ($name:ident, $shape:ident) => {
        pub fn $name(name: impl Into<String>) -> Self {
            Self::node(name, Shape::$shape)
        }
    };
}

macro_rules! array_constructor {
    ($(#[$doc:meta])* $name:ident, $shape:ident) => {
        $(#[$doc])*
        pub fn $name(name: impl Into<String>, length: usize) -> Self {
            Self::node(name, Shape::$shape { length })
        }
    };
}

impl SchemaNode {
    fn node(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            options: SchemaOptions::new(),
            shape,
        }
    }

    scalar_constructor!(byte, Byte);
    scalar_constructor!(short, Short);
    scalar_constructor!(int, Int);
    scalar_constructor!(long, Long);
    scalar_constructor!(float, Float);
    scalar_constructor!(double, Double);
    scalar_constructor!(string, String);

    array_constructor!(
        /// Describes a byte array named `name`. `length` of zero leaves the
        /// length unconstrained; any positive value must match exactly.
        byte_array,
        ByteArray
    );
    array_constructor!(int_array, IntArray);
    array_constructor!(long_array, LongArray);
    array_constructor!(double_array, DoubleArray);

    /// Describes a list named `name` whose every element matches `element`.
    pub fn list(name: impl Into<String>, element: SchemaNode) -> Self {
        Self::node(
            name,
            Shape::List {
                element: Box::new(element),
            },
        )
    }

    /// Describes a compound named `name` containing the declared `fields`.
    ///
    /// Entries are matched by name, so duplicate field names are an
    /// authoring error ([`Error::DuplicateField`]), as is an empty field
    /// name on a field without unnamed matching ([`Error::UnnamedField`]).
    pub fn compound(name: impl Into<String>, fields: Vec<SchemaNode>) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            if field.name.is_empty() && !field.options.match_unnamed {
                return Err(Error::UnnamedField);
            }
            if fields[..i].iter().any(|earlier| earlier.name == field.name) {
                return Err(Error::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self::node(name, Shape::Compound { fields }))
    }

    /// Attaches options, rejecting combinations that do not apply to this
    /// node's kind with [`Error::InvalidOptions`].
    pub fn with_options(mut self, options: SchemaOptions) -> Result<Self> {
        if options.allow_extra && !matches!(self.shape, Shape::Compound { .. }) {
            return Err(Error::InvalidOptions(
                "allow_extra is only valid on a compound schema",
            ));
        }
        if options.lenient_elements && !matches!(self.shape, Shape::List { .. }) {
            return Err(Error::InvalidOptions(
                "lenient_elements is only valid on a list schema",
            ));
        }
        if options.require_nonempty && !matches!(self.shape, Shape::List { .. }) {
            return Err(Error::InvalidOptions(
                "require_nonempty is only valid on a list schema",
            ));
        }
        self.options = options;
        Ok(self)
    }

    /// The expected tag name, empty for unnamed matching.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> SchemaOptions {
        self.options
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The tag a conforming value must carry.
    pub fn tag(&self) -> Tag {
        match &self.shape {
            Shape::Byte => Tag::Byte,
            Shape::Short => Tag::Short,
            Shape::Int => Tag::Int,
            Shape::Long => Tag::Long,
            Shape::Float => Tag::Float,
            Shape::Double => Tag::Double,
            Shape::String => Tag::String,
            Shape::ByteArray { .. } => Tag::ByteArray,
            Shape::IntArray { .. } => Tag::IntArray,
            Shape::LongArray { .. } => Tag::LongArray,
            Shape::DoubleArray { .. } => Tag::DoubleArray,
            Shape::List { .. } => Tag::List,
            Shape::Compound { .. } => Tag::Compound,
        }
    }

    /// The expected length of the corresponding array, `0` meaning
    /// unconstrained. Always `0` for non-array shapes.
    pub fn expected_length(&self) -> usize {
        match &self.shape {
            Shape::ByteArray { length }
            | Shape::IntArray { length }
            | Shape::LongArray { length }
            | Shape::DoubleArray { length } => *length,
            _ => 0,
        }
    }

    /// Indicates whether there is an expected length of the corresponding
    /// array.
    pub fn has_expected_length(&self) -> bool {
        self.expected_length() > 0
    }

    /// The element schema of a list shape.
    pub fn element(&self) -> Option<&SchemaNode> {
        match &self.shape {
            Shape::List { element } => Some(element),
            _ => None,
        }
    }

    /// The declared fields of a compound shape.
    pub fn fields(&self) -> Option<&[SchemaNode]> {
        match &self.shape {
            Shape::Compound { fields } => Some(fields),
            _ => None,
        }
    }

    /// Constructs a default value satisfying the constraints of this node
    /// and, recursively, of its children.
    ///
    /// Scalars default to zero, strings to empty, arrays to a zero-filled
    /// buffer of the expected length, compounds to one default entry per
    /// declared field, and lists to an empty list (one default element when
    /// the node requires a nonempty list). The result always passes
    /// [`verify`](crate::verify) against the node it was built from. Pure;
    /// no side effects beyond allocation.
    pub fn build_default_tree(&self) -> Value {
        match &self.shape {
            Shape::Byte => Value::Byte(0),
            Shape::Short => Value::Short(0),
            Shape::Int => Value::Int(0),
            Shape::Long => Value::Long(0),
            Shape::Float => Value::Float(0.0),
            Shape::Double => Value::Double(0.0),
            Shape::String => Value::String(String::new()),
            Shape::ByteArray { length } => Value::ByteArray(ByteArray::zeroed(*length)),
            Shape::IntArray { length } => Value::IntArray(IntArray::zeroed(*length)),
            Shape::LongArray { length } => Value::LongArray(LongArray::zeroed(*length)),
            Shape::DoubleArray { length } => Value::DoubleArray(DoubleArray::zeroed(*length)),
            Shape::List { element } => {
                let mut list = List::with_element_tag(element.tag());
                if self.options.require_nonempty {
                    list.push_unchecked(element.build_default_tree());
                }
                Value::List(list)
            }
            Shape::Compound { fields } => {
                let mut compound = Compound::with_capacity(fields.len());
                for field in fields {
                    compound.insert(field.name.clone(), field.build_default_tree());
                }
                Value::Compound(compound)
            }
        }
    }
}
