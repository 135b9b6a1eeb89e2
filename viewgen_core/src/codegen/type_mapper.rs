//! Prop type annotation to validator descriptor mapping.

use super::imports::{Import, Imports};
use crate::error::{Result, ViewgenError};
use crate::js::{Expr, Member};
use crate::schema::{ReservedPrimitive, TypeAnnotation};
use tracing::trace;

/// How the host compares or transforms an incoming prop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Presence only; rendered as `true`.
    PassThrough,
    Process(Processor),
    Diff(Differ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processor {
    Color,
    ColorArray,
    ImageSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Differ {
    Point,
    EdgeInsets,
}

impl Processor {
    pub fn import(self) -> Import {
        match self {
            Processor::Color => Import::ProcessColor,
            Processor::ColorArray => Import::ProcessColorArray,
            Processor::ImageSource => Import::ResolveAssetSource,
        }
    }
}

impl Differ {
    pub fn import(self) -> Import {
        match self {
            Differ::Point => Import::PointsDiffer,
            Differ::EdgeInsets => Import::InsetsDiffer,
        }
    }
}

impl Validator {
    /// The host capability this validator refers to, if any.
    pub fn import(self) -> Option<Import> {
        match self {
            Validator::PassThrough => None,
            Validator::Process(processor) => Some(processor.import()),
            Validator::Diff(differ) => Some(differ.import()),
        }
    }

    pub fn to_expr(self) -> Expr {
        match self {
            Validator::PassThrough => Expr::Bool(true),
            Validator::Process(processor) => Expr::Object(vec![Member::prop(
                "process",
                Expr::ident(processor.import().binding()),
            )]),
            Validator::Diff(differ) => Expr::Object(vec![Member::prop(
                "diff",
                Expr::ident(differ.import().binding()),
            )]),
        }
    }
}

/// Maps a prop's type annotation to its validator, registering the
/// processor or differ import it needs.
pub fn map_prop_type(annotation: &TypeAnnotation, imports: &mut Imports) -> Result<Validator> {
    let validator = validator_for(annotation)?;
    if let Some(import) = validator.import() {
        imports.add(import);
    }
    trace!(annotation = annotation.tag(), ?validator, "Mapped prop type");
    Ok(validator)
}

fn validator_for(annotation: &TypeAnnotation) -> Result<Validator> {
    match annotation {
        TypeAnnotation::Boolean
        | TypeAnnotation::String
        | TypeAnnotation::Int32
        | TypeAnnotation::Double
        | TypeAnnotation::Float
        | TypeAnnotation::Object
        | TypeAnnotation::StringEnum
        | TypeAnnotation::Int32Enum => Ok(Validator::PassThrough),
        TypeAnnotation::Reserved(primitive) => Ok(match primitive {
            ReservedPrimitive::ColorPrimitive => Validator::Process(Processor::Color),
            ReservedPrimitive::ImageSourcePrimitive => Validator::Process(Processor::ImageSource),
            ReservedPrimitive::PointPrimitive => Validator::Diff(Differ::Point),
            ReservedPrimitive::EdgeInsetsPrimitive => Validator::Diff(Differ::EdgeInsets),
        }),
        TypeAnnotation::Array(element_type) => match element_type.as_ref() {
            TypeAnnotation::Reserved(primitive) => match primitive {
                ReservedPrimitive::ColorPrimitive => Ok(Validator::Process(Processor::ColorArray)),
                ReservedPrimitive::ImageSourcePrimitive | ReservedPrimitive::PointPrimitive => {
                    Ok(Validator::PassThrough)
                }
                ReservedPrimitive::EdgeInsetsPrimitive => Err(ViewgenError::unknown_type_annotation(
                    format!("ArrayTypeAnnotation<{}>", primitive),
                )),
            },
            TypeAnnotation::Boolean
            | TypeAnnotation::String
            | TypeAnnotation::Int32
            | TypeAnnotation::Double
            | TypeAnnotation::Float
            | TypeAnnotation::Object
            | TypeAnnotation::StringEnum
            | TypeAnnotation::Int32Enum
            | TypeAnnotation::Array(_) => Ok(Validator::PassThrough),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::print_expr;
    use pretty_assertions::assert_eq;

    fn map(annotation: TypeAnnotation) -> (Result<Validator>, Imports) {
        let mut imports = Imports::new();
        let result = map_prop_type(&annotation, &mut imports);
        (result, imports)
    }

    #[test]
    fn test_pass_through_kinds() {
        for annotation in [
            TypeAnnotation::Boolean,
            TypeAnnotation::String,
            TypeAnnotation::Int32,
            TypeAnnotation::Double,
            TypeAnnotation::Float,
            TypeAnnotation::Object,
            TypeAnnotation::StringEnum,
            TypeAnnotation::Int32Enum,
        ] {
            let (result, imports) = map(annotation.clone());
            assert_eq!(result.unwrap(), Validator::PassThrough, "{:?}", annotation);
            assert!(imports.is_empty());
        }
    }

    #[test]
    fn test_reserved_primitives() {
        let cases = [
            (ReservedPrimitive::ColorPrimitive, Validator::Process(Processor::Color), Import::ProcessColor),
            (
                ReservedPrimitive::ImageSourcePrimitive,
                Validator::Process(Processor::ImageSource),
                Import::ResolveAssetSource,
            ),
            (ReservedPrimitive::PointPrimitive, Validator::Diff(Differ::Point), Import::PointsDiffer),
            (
                ReservedPrimitive::EdgeInsetsPrimitive,
                Validator::Diff(Differ::EdgeInsets),
                Import::InsetsDiffer,
            ),
        ];
        for (primitive, expected, import) in cases {
            let (result, imports) = map(TypeAnnotation::Reserved(primitive));
            assert_eq!(result.unwrap(), expected);
            assert!(imports.contains(import));
            assert_eq!(imports.len(), 1);
        }
    }

    #[test]
    fn test_color_array_is_processed() {
        let (result, imports) = map(TypeAnnotation::array_of(TypeAnnotation::Reserved(
            ReservedPrimitive::ColorPrimitive,
        )));
        assert_eq!(result.unwrap(), Validator::Process(Processor::ColorArray));
        assert!(imports.contains(Import::ProcessColorArray));
    }

    #[test]
    fn test_point_and_image_arrays_pass_through() {
        for primitive in [ReservedPrimitive::PointPrimitive, ReservedPrimitive::ImageSourcePrimitive] {
            let (result, imports) = map(TypeAnnotation::array_of(TypeAnnotation::Reserved(primitive)));
            assert_eq!(result.unwrap(), Validator::PassThrough);
            assert!(imports.is_empty());
        }
    }

    #[test]
    fn test_edge_insets_array_is_rejected() {
        let (result, imports) = map(TypeAnnotation::array_of(TypeAnnotation::Reserved(
            ReservedPrimitive::EdgeInsetsPrimitive,
        )));
        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            ViewgenError::UnknownTypeAnnotation { annotation } if annotation.contains("EdgeInsetsPrimitive")
        ));
        assert!(imports.is_empty());
    }

    #[test]
    fn test_non_reserved_arrays_pass_through() {
        for element in [
            TypeAnnotation::String,
            TypeAnnotation::Object,
            TypeAnnotation::array_of(TypeAnnotation::Int32),
        ] {
            let (result, _) = map(TypeAnnotation::array_of(element));
            assert_eq!(result.unwrap(), Validator::PassThrough);
        }
    }

    #[test]
    fn test_validator_rendering() {
        assert_eq!(print_expr(&Validator::PassThrough.to_expr()), "true");
        assert_eq!(
            print_expr(&Validator::Process(Processor::Color).to_expr()),
            "{\n  process: processColor,\n}"
        );
        assert_eq!(
            print_expr(&Validator::Diff(Differ::EdgeInsets).to_expr()),
            "{\n  diff: insetsDiffer,\n}"
        );
    }
}
