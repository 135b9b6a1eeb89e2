//! Host capabilities referenced by generated modules, and the per-invocation
//! set of imports a generation run needs.

use std::collections::BTreeSet;

/// A host runtime capability the generated code binds at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Import {
    NativeComponentRegistry,
    UIManager,
    DispatchCommand,
    ConditionallyIgnoredEventHandlers,
    ProcessColor,
    ProcessColorArray,
    ResolveAssetSource,
    PointsDiffer,
    InsetsDiffer,
}

impl Import {
    /// Local name the import is bound to in the generated module.
    pub fn binding(self) -> &'static str {
        match self {
            Import::NativeComponentRegistry => "NativeComponentRegistry",
            Import::UIManager => "UIManager",
            Import::DispatchCommand => "dispatchCommand",
            Import::ConditionallyIgnoredEventHandlers => "ConditionallyIgnoredEventHandlers",
            Import::ProcessColor => "processColor",
            Import::ProcessColorArray => "processColorArray",
            Import::ResolveAssetSource => "resolveAssetSource",
            Import::PointsDiffer => "pointsDiffer",
            Import::InsetsDiffer => "insetsDiffer",
        }
    }

    /// The full import statement, one line.
    pub fn statement(self) -> &'static str {
        match self {
            Import::NativeComponentRegistry => {
                "const NativeComponentRegistry = require('react-native/Libraries/NativeComponent/NativeComponentRegistry');"
            }
            Import::UIManager => "const {UIManager} = require('react-native');",
            Import::DispatchCommand => {
                "const {dispatchCommand} = require('react-native/Libraries/ReactNative/RendererProxy');"
            }
            Import::ConditionallyIgnoredEventHandlers => {
                "const {ConditionallyIgnoredEventHandlers} = require('react-native/Libraries/NativeComponent/ViewConfigIgnore');"
            }
            Import::ProcessColor => {
                "const processColor = require('react-native/Libraries/StyleSheet/processColor');"
            }
            Import::ProcessColorArray => {
                "const processColorArray = require('react-native/Libraries/StyleSheet/processColorArray');"
            }
            Import::ResolveAssetSource => {
                "const resolveAssetSource = require('react-native/Libraries/Image/resolveAssetSource');"
            }
            Import::PointsDiffer => {
                "const pointsDiffer = require('react-native/Libraries/Utilities/differ/pointsDiffer');"
            }
            Import::InsetsDiffer => {
                "const insetsDiffer = require('react-native/Libraries/Utilities/differ/insetsDiffer');"
            }
        }
    }
}

/// Imports accumulated over one generation run. Adding is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    required: BTreeSet<Import>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: Import) {
        self.required.insert(import);
    }

    pub fn contains(&self, import: Import) -> bool {
        self.required.contains(&import)
    }

    pub fn len(&self) -> usize {
        self.required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Import statements in lexicographic order.
    pub fn statements(&self) -> Vec<&'static str> {
        let mut statements: Vec<&'static str> =
            self.required.iter().map(|import| import.statement()).collect();
        statements.sort_unstable();
        statements.dedup();
        statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_is_idempotent() {
        let mut imports = Imports::new();
        imports.add(Import::DispatchCommand);
        imports.add(Import::DispatchCommand);
        assert_eq!(imports.len(), 1);
        assert!(imports.contains(Import::DispatchCommand));
    }

    #[test]
    fn test_statements_sorted_by_text() {
        let mut imports = Imports::new();
        imports.add(Import::InsetsDiffer);
        imports.add(Import::UIManager);
        imports.add(Import::NativeComponentRegistry);
        imports.add(Import::DispatchCommand);
        assert_eq!(
            imports.statements(),
            vec![
                "const NativeComponentRegistry = require('react-native/Libraries/NativeComponent/NativeComponentRegistry');",
                "const insetsDiffer = require('react-native/Libraries/Utilities/differ/insetsDiffer');",
                "const {UIManager} = require('react-native');",
                "const {dispatchCommand} = require('react-native/Libraries/ReactNative/RendererProxy');",
            ]
        );
    }

    #[test]
    fn test_statement_binds_its_binding_name() {
        for import in [
            Import::NativeComponentRegistry,
            Import::UIManager,
            Import::DispatchCommand,
            Import::ConditionallyIgnoredEventHandlers,
            Import::ProcessColor,
            Import::ProcessColorArray,
            Import::ResolveAssetSource,
            Import::PointsDiffer,
            Import::InsetsDiffer,
        ] {
            assert!(
                import.statement().contains(import.binding()),
                "{:?} statement should bind {}",
                import,
                import.binding()
            );
        }
    }
}
