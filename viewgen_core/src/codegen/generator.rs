//! Whole-library generation: iterates the schema, collects imports and
//! renders the single output file.

use super::component::render_component_module;
use super::imports::Imports;
use super::render::render_file;
use crate::error::Result;
use crate::schema::Schema;
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// Suffix appended to the library name to form the output file name.
pub const FILE_NAME_SUFFIX: &str = "NativeViewConfig";

pub const DEFAULT_FILE_EXTENSION: &str = "js";

/// Output file name to source text.
pub type GeneratedFiles = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Extension of the output file, without the dot.
    pub file_extension: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn with_file_extension(mut self, file_extension: impl Into<String>) -> Self {
        self.file_extension = file_extension.into();
        self
    }
}

/// Generator for a library's view configuration file.
#[derive(Debug, Clone, Default)]
pub struct ViewConfigGenerator {
    options: GenerateOptions,
}

impl ViewConfigGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// `<library>NativeViewConfig.<extension>`
    pub fn file_name(&self, library_name: &str) -> String {
        let extension = self.options.file_extension.trim_start_matches('.');
        if extension.is_empty() {
            format!("{library_name}{FILE_NAME_SUFFIX}")
        } else {
            format!("{library_name}{FILE_NAME_SUFFIX}.{extension}")
        }
    }

    /// Generates the file for every component in `schema`.
    ///
    /// Any error aborts the whole library: the schema is logged for
    /// diagnosis and the error is returned unchanged, with no partial output.
    ///
    /// Every component module is emitted whole, so a schema with several
    /// components yields a file that repeats the `nativeComponentName`
    /// binding and the default export. Callers are expected to pass one
    /// component per library.
    pub fn generate(&self, library_name: &str, schema: &Schema) -> Result<GeneratedFiles> {
        info!(
            library = library_name,
            module_count = schema.modules.len(),
            component_count = schema.component_count(),
            "Generating view configs"
        );

        let text = match self.generate_text(schema) {
            Ok(text) => text,
            Err(err) => {
                let dump = serde_json::to_string(schema)
                    .unwrap_or_else(|dump_err| format!("<unserializable schema: {dump_err}>"));
                error!(library = library_name, error = %err, "Error parsing schema for {}", library_name);
                error!(library = library_name, schema = %dump, "Failing schema");
                return Err(err);
            }
        };

        let file_name = self.file_name(library_name);
        info!(
            library = library_name,
            file_name = %file_name,
            output_length = text.len(),
            "View config generation complete"
        );

        let mut files = GeneratedFiles::new();
        files.insert(file_name, text);
        Ok(files)
    }

    fn generate_text(&self, schema: &Schema) -> Result<String> {
        let mut imports = Imports::new();
        let mut modules = Vec::new();

        for (module_name, module) in schema.modules.iter() {
            let Some(components) = module.components() else {
                debug!(module = module_name, "Skipping non-component module");
                continue;
            };
            for (component_name, component) in components.iter() {
                debug!(module = module_name, component = component_name, "Generating component");
                let source = render_component_module(component_name, component, &mut imports)?;
                modules.push(source);
            }
        }

        let body = modules
            .iter()
            .map(|source| source.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n\n");
        debug!(import_count = imports.len(), "Rendering view config file");
        Ok(render_file(&imports, &body))
    }
}

/// Generates `<library>NativeViewConfig.js` for `schema`.
///
/// Assumes one component per library; see [`ViewConfigGenerator::generate`].
pub fn generate(library_name: &str, schema: &Schema) -> Result<GeneratedFiles> {
    ViewConfigGenerator::default().generate(library_name, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::imports::Import;
    use crate::codegen::render::FILE_HEADER;
    use crate::error::ViewgenError;
    use crate::schema::{
        Command, Component, Event, ExtendsProps, KnownTypeName, Module, OrderedMap, Prop,
        ReservedPrimitive, TypeAnnotation,
    };
    use pretty_assertions::assert_eq;

    fn core_view() -> Vec<ExtendsProps> {
        vec![ExtendsProps::BuiltIn(KnownTypeName::ReactNativeCoreViewProps)]
    }

    fn schema_of(modules: Vec<(&str, Module)>) -> Schema {
        Schema {
            modules: modules.into_iter().collect(),
        }
    }

    fn component_module(components: Vec<(&str, Component)>) -> Module {
        Module::Component {
            components: components.into_iter().collect::<OrderedMap<Component>>(),
        }
    }

    #[test]
    fn test_two_modules_one_file_in_schema_order() {
        let schema = schema_of(vec![
            (
                "Second",
                component_module(vec![(
                    "SecondView",
                    Component::builder().extends_props(core_view()).build(),
                )]),
            ),
            (
                "First",
                component_module(vec![(
                    "FirstView",
                    Component::builder().extends_props(core_view()).build(),
                )]),
            ),
        ]);

        let files = generate("Lib", &schema).unwrap();
        assert_eq!(files.len(), 1);
        let text = files.get("LibNativeViewConfig.js").unwrap();

        assert_eq!(text.matches("uiViewClassName").count(), 2);
        let second = text.find("uiViewClassName: 'SecondView'").unwrap();
        let first = text.find("uiViewClassName: 'FirstView'").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_non_component_modules_are_skipped() {
        let schema = schema_of(vec![
            ("NativeThing", Module::Other),
            ("Views", component_module(vec![("OnlyView", Component::default())])),
        ]);
        let files = generate("Lib", &schema).unwrap();
        let text = &files["LibNativeViewConfig.js"];
        assert_eq!(text.matches("uiViewClassName").count(), 1);
    }

    #[test]
    fn test_full_file_text() {
        let component = Component::builder()
            .props(vec![
                Prop::new("color", TypeAnnotation::Reserved(ReservedPrimitive::ColorPrimitive)),
                Prop::new("disabled", TypeAnnotation::Boolean),
            ])
            .events(vec![Event::bubble("onChange")])
            .commands(vec![Command::new("setValue", ["value"])])
            .extends_props(core_view())
            .build();
        let schema = schema_of(vec![(
            "Slider",
            component_module(vec![("SliderView", component)]),
        )]);

        let files = generate("Slider", &schema).unwrap();
        let text = &files["SliderNativeViewConfig.js"];

        let expected = format!(
            "{FILE_HEADER}
const NativeComponentRegistry = require('react-native/Libraries/NativeComponent/NativeComponentRegistry');
const processColor = require('react-native/Libraries/StyleSheet/processColor');
const {{ConditionallyIgnoredEventHandlers}} = require('react-native/Libraries/NativeComponent/ViewConfigIgnore');
const {{dispatchCommand}} = require('react-native/Libraries/ReactNative/RendererProxy');

let nativeComponentName = 'SliderView';

export const __INTERNAL_VIEW_CONFIG = {{
  uiViewClassName: 'SliderView',
  bubblingEventTypes: {{
    topChange: {{
      phasedRegistrationNames: {{
        captured: 'onChangeCapture',
        bubbled: 'onChange',
      }},
    }},
  }},
  validAttributes: {{
    color: {{
      process: processColor,
    }},
    disabled: true,
    ...ConditionallyIgnoredEventHandlers({{
      onChange: true,
    }}),
  }},
}};

export default NativeComponentRegistry.get(nativeComponentName, () => __INTERNAL_VIEW_CONFIG);

export const Commands = {{
  setValue(ref, value) {{
    dispatchCommand(ref, 'setValue', [value]);
  }},
}};
"
        );
        assert_eq!(text, &expected);
    }

    #[test]
    fn test_components_are_separated_by_blank_line() {
        let schema = schema_of(vec![(
            "Views",
            component_module(vec![
                ("AView", Component::default()),
                ("BView", Component::default()),
            ]),
        )]);
        let files = generate("Lib", &schema).unwrap();
        let text = &files["LibNativeViewConfig.js"];
        assert!(text.contains(
            "export default NativeComponentRegistry.get(nativeComponentName, () => __INTERNAL_VIEW_CONFIG);\n\nlet nativeComponentName = 'BView';"
        ));
    }

    #[test]
    fn test_imports_are_deduplicated_across_components() {
        let schema = schema_of(vec![(
            "Views",
            component_module(vec![
                (
                    "AView",
                    Component::builder()
                        .commands(vec![Command::without_params("focus")])
                        .build(),
                ),
                (
                    "BView",
                    Component::builder()
                        .commands(vec![Command::without_params("blur")])
                        .build(),
                ),
            ]),
        )]);
        let files = generate("Lib", &schema).unwrap();
        let text = &files["LibNativeViewConfig.js"];
        assert_eq!(text.matches(Import::DispatchCommand.statement()).count(), 1);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let component = Component::builder()
            .props(vec![
                Prop::new("offset", TypeAnnotation::Reserved(ReservedPrimitive::PointPrimitive)),
                Prop::new("insets", TypeAnnotation::Reserved(ReservedPrimitive::EdgeInsetsPrimitive)),
                Prop::new("source", TypeAnnotation::Reserved(ReservedPrimitive::ImageSourcePrimitive)),
            ])
            .events(vec![Event::direct("onLoad"), Event::bubble("onPress")])
            .paper_component_name_deprecated("RCTImageLegacy")
            .build();
        let schema = schema_of(vec![("Image", component_module(vec![("ImageView", component)]))]);

        let first = generate("Image", &schema).unwrap();
        let second = generate("Image", &schema).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_aborts_whole_library() {
        let bad = Component::builder()
            .props(vec![Prop::new(
                "margins",
                TypeAnnotation::array_of(TypeAnnotation::Reserved(ReservedPrimitive::EdgeInsetsPrimitive)),
            )])
            .build();
        let schema = schema_of(vec![(
            "Views",
            component_module(vec![("GoodView", Component::default()), ("BadView", bad)]),
        )]);

        let err = generate("Lib", &schema).unwrap_err();
        assert!(matches!(err, ViewgenError::UnknownTypeAnnotation { .. }));
    }

    #[test]
    fn test_custom_file_extension() {
        let generator = ViewConfigGenerator::new(GenerateOptions::default().with_file_extension(".mjs"));
        assert_eq!(generator.file_name("Lib"), "LibNativeViewConfig.mjs");

        let bare = ViewConfigGenerator::new(GenerateOptions::default().with_file_extension(""));
        assert_eq!(bare.file_name("Lib"), "LibNativeViewConfig");
    }

    #[test]
    fn test_empty_schema_renders_header_only() {
        let files = generate("Empty", &Schema::default()).unwrap();
        assert_eq!(files["EmptyNativeViewConfig.js"], FILE_HEADER);
    }
}
