//! Structural verification of value trees against schema trees.
//!
//! [`verify`] walks a value tree and a schema tree in lockstep and reports
//! the first deviation; [`verify_all`] collects every deviation with its
//! path. Violations are data about the input, not errors: a caller that
//! expects malformed input inspects the failing paths and typically
//! recovers by substituting
//! [`build_default_tree`](crate::SchemaNode::build_default_tree).
//!
//! Neither function retains state between calls. A schema tree is never
//! mutated by verification, so one schema may serve any number of
//! concurrent calls.

use std::fmt::{self, Display};
use std::ops::ControlFlow;

use crate::{Compound, List, SchemaNode, SchemaOptions, Shape, Tag, Value};

/// One step of a path from the root of a tree to a nested tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A compound entry name.
    Name(String),
    /// A list element position.
    Index(usize),
}

/// The location of a violation within the checked tree.
///
/// Renders as `pos[1].x`; the tree root renders as `(root)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagPath {
    segments: Vec<PathSegment>,
}

impl TagPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    fn from_segments(segments: &[PathSegment]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl Display for TagPath {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        if self.segments.is_empty() {
            return formatter.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Name(name) => {
                    if i > 0 {
                        formatter.write_str(".")?;
                    }
                    formatter.write_str(name)?;
                }
                PathSegment::Index(index) => write!(formatter, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// One way a value tree deviates from its schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// The value's kind differs from the schema node's kind.
    KindMismatch { expected: Tag, actual: Tag },
    /// An array's length differs from the schema's exact length, or a
    /// required-nonempty list is empty.
    LengthMismatch { expected: usize, actual: usize },
    /// A compound entry the schema does not declare.
    UnexpectedEntry,
    /// A declared, non-optional entry is absent.
    MissingRequiredEntry,
}

impl Display for ViolationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViolationKind::KindMismatch { expected, actual } => write!(
                formatter,
                "kind mismatch: expected {expected:?}, found {actual:?}"
            ),
            ViolationKind::LengthMismatch { expected, actual } => write!(
                formatter,
                "length mismatch: expected {expected}, found {actual}"
            ),
            ViolationKind::UnexpectedEntry => formatter.write_str("unexpected entry"),
            ViolationKind::MissingRequiredEntry => formatter.write_str("missing required entry"),
        }
    }
}

/// A structured report of one deviation, naming the failing path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    path: TagPath,
    kind: ViolationKind,
}

impl Violation {
    pub fn path(&self) -> &TagPath {
        &self.path
    }

    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }
}

impl Display for Violation {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} at {}", self.kind, self.path)
    }
}

/// Checks `value` against `schema`, stopping at the first violation.
///
/// # Example
///
/// ```
/// use nbt_schema::{Compound, SchemaNode, Value, verify};
///
/// let schema = SchemaNode::compound(
///     "root",
///     vec![SchemaNode::double_array("pos", 3)],
/// )
/// .unwrap();
///
/// let mut root = Compound::new();
/// root.insert("pos", vec![1.0, 2.0, 3.0]);
/// assert!(verify(&Value::from(root), &schema).is_ok());
/// ```
pub fn verify(value: &Value, schema: &SchemaNode) -> std::result::Result<(), Violation> {
    let mut checker = Checker::new(true);
    let _ = checker.check(value, schema);
    match checker.violations.into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Checks `value` against `schema`, collecting every violation with its
/// path, in traversal order.
pub fn verify_all(value: &Value, schema: &SchemaNode) -> Vec<Violation> {
    let mut checker = Checker::new(false);
    let _ = checker.check(value, schema);
    checker.violations
}

struct Checker {
    fail_fast: bool,
    path: Vec<PathSegment>,
    violations: Vec<Violation>,
}

impl Checker {
    fn new(fail_fast: bool) -> Self {
        Self {
            fail_fast,
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    fn report(&mut self, kind: ViolationKind) -> ControlFlow<()> {
        self.violations.push(Violation {
            path: TagPath::from_segments(&self.path),
            kind,
        });
        if self.fail_fast {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn check(&mut self, value: &Value, schema: &SchemaNode) -> ControlFlow<()> {
        let expected = schema.tag();
        let actual = value.tag();
        if actual != expected {
            return self.report(ViolationKind::KindMismatch { expected, actual });
        }
        match (schema.shape(), value) {
            (Shape::ByteArray { length }, Value::ByteArray(array)) => {
                self.check_length(*length, array.len())
            }
            (Shape::IntArray { length }, Value::IntArray(array)) => {
                self.check_length(*length, array.len())
            }
            (Shape::LongArray { length }, Value::LongArray(array)) => {
                self.check_length(*length, array.len())
            }
            (Shape::DoubleArray { length }, Value::DoubleArray(array)) => {
                self.check_length(*length, array.len())
            }
            (Shape::List { element }, Value::List(list)) => {
                self.check_list(list, element, schema.options())
            }
            (Shape::Compound { fields }, Value::Compound(compound)) => {
                self.check_compound(compound, fields, schema.options())
            }
            // scalars and strings: kind equality is the whole check
            _ => ControlFlow::Continue(()),
        }
    }

    fn check_length(&mut self, expected: usize, actual: usize) -> ControlFlow<()> {
        if expected > 0 && actual != expected {
            return self.report(ViolationKind::LengthMismatch { expected, actual });
        }
        ControlFlow::Continue(())
    }

    fn check_list(
        &mut self,
        list: &List,
        element: &SchemaNode,
        options: SchemaOptions,
    ) -> ControlFlow<()> {
        if options.require_nonempty && list.is_empty() {
            return self.report(ViolationKind::LengthMismatch {
                expected: 1,
                actual: 0,
            });
        }
        for (index, item) in list.iter().enumerate() {
            if options.lenient_elements && item.tag() != element.tag() {
                continue;
            }
            self.path.push(PathSegment::Index(index));
            let flow = self.check(item, element);
            self.path.pop();
            flow?;
        }
        ControlFlow::Continue(())
    }

    fn check_compound(
        &mut self,
        compound: &Compound,
        fields: &[SchemaNode],
        options: SchemaOptions,
    ) -> ControlFlow<()> {
        let mut claimed: Vec<&str> = Vec::with_capacity(fields.len());
        for field in fields {
            let (key, entry) = match compound.get(field.name()) {
                Some(entry) => (field.name(), Some(entry)),
                None if field.options().match_unnamed => ("", compound.get("")),
                None => (field.name(), None),
            };
            match entry {
                Some(value) => {
                    claimed.push(key);
                    self.path.push(PathSegment::Name(key.to_owned()));
                    let flow = self.check(value, field);
                    self.path.pop();
                    flow?;
                }
                None => {
                    if !field.options().optional {
                        self.path.push(PathSegment::Name(field.name().to_owned()));
                        let flow = self.report(ViolationKind::MissingRequiredEntry);
                        self.path.pop();
                        flow?;
                    }
                }
            }
        }
        if !options.allow_extra {
            for (name, _) in compound.iter() {
                if !claimed.contains(&name.as_str()) {
                    self.path.push(PathSegment::Name(name.clone()));
                    let flow = self.report(ViolationKind::UnexpectedEntry);
                    self.path.pop();
                    flow?;
                }
            }
        }
        ControlFlow::Continue(())
    }
}
