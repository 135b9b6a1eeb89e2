//! Component schema model.
//!
//! The schema arrives as JSON produced by an upstream parser. It is first read
//! into the `Raw*` wire shapes, then converted with `TryFrom` into the typed
//! model. Everything the generator dispatches on (prop type annotations,
//! inheritance entries) is a closed enum, so an unrecognized tag is rejected
//! at the boundary with the [`ViewgenError`] kind naming it, and every `match`
//! downstream is exhaustive.

use crate::error::{Result, ViewgenError};
use bon::Builder;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use strum::{Display, EnumString};
use tracing::{debug, error, trace};

/// String-keyed map that keeps insertion order.
///
/// Generation order must follow the key order of the schema document, so the
/// modules and components maps cannot be hashed or sorted.
///
/// Entries live in a `Vec`: [`OrderedMap::get`] and [`OrderedMap::insert`]
/// scan linearly, so building a map of `n` keys is O(n²). Schemas hold a
/// handful of modules and components per library.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`. An existing key keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// A full library schema: module name to module.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub modules: OrderedMap<Module>,
}

impl Schema {
    /// Parses the JSON wire form. Malformed JSON is [`ViewgenError::Json`];
    /// an unknown type tag or inheritance entry keeps its own error kind.
    /// On failure the schema text is logged for diagnosis.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let schema = serde_json::from_str::<RawSchema>(json)
            .map_err(ViewgenError::from)
            .and_then(Schema::try_from)
            .map_err(|err| {
                error!(error = %err, "Error parsing schema");
                error!(schema = %json, "Failing schema");
                err
            })?;
        debug!(
            module_count = schema.modules.len(),
            component_count = schema.component_count(),
            "Parsed component schema"
        );
        Ok(schema)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        trace!("Reading schema from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Every component of every component module, in generation order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &str, &Component)> {
        self.modules.iter().flat_map(|(module_name, module)| {
            module
                .components()
                .into_iter()
                .flat_map(|components| components.iter())
                .map(move |(component_name, component)| (module_name, component_name, component))
        })
    }

    pub fn component_count(&self) -> usize {
        self.components().count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Module {
    Component { components: OrderedMap<Component> },
    /// Native modules and any other non-component entries. Skipped by the
    /// generator.
    Other,
}

impl Module {
    pub fn components(&self) -> Option<&OrderedMap<Component>> {
        match self {
            Module::Component { components } => Some(components),
            Module::Other => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[builder(default)]
    pub props: Vec<Prop>,
    #[builder(default)]
    pub events: Vec<Event>,
    #[builder(default)]
    pub commands: Vec<Command>,
    #[builder(default)]
    pub extends_props: Vec<ExtendsProps>,
    /// Legacy native registration name, used instead of the component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub paper_component_name: Option<String>,
    /// Second legacy name; its presence makes the emitted module resolve the
    /// registration name at runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub paper_component_name_deprecated: Option<String>,
}

impl Component {
    /// Name registered with the host: the legacy override when present.
    pub fn native_component_name<'a>(&'a self, component_name: &'a str) -> &'a str {
        self.paper_component_name.as_deref().unwrap_or(component_name)
    }

    /// The deprecated registration name. An empty string counts as unset.
    pub fn deprecated_component_name(&self) -> Option<&str> {
        self.paper_component_name_deprecated
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    pub name: String,
    pub type_annotation: TypeAnnotation,
}

impl Prop {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            type_annotation,
        }
    }
}

/// Reserved primitive names understood by the host's prop processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ReservedPrimitive {
    ColorPrimitive,
    ImageSourcePrimitive,
    PointPrimitive,
    EdgeInsetsPrimitive,
}

/// Prop type annotation. Closed: the wire form is converted through
/// [`RawTypeAnnotation`] and unknown tags never get this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "RawTypeAnnotation")]
pub enum TypeAnnotation {
    Boolean,
    String,
    Int32,
    Double,
    Float,
    Object,
    StringEnum,
    Int32Enum,
    Reserved(ReservedPrimitive),
    Array(Box<TypeAnnotation>),
}

impl TypeAnnotation {
    pub fn array_of(element_type: TypeAnnotation) -> Self {
        TypeAnnotation::Array(Box::new(element_type))
    }

    /// The wire tag for this annotation.
    pub fn tag(&self) -> &'static str {
        match self {
            TypeAnnotation::Boolean => "BooleanTypeAnnotation",
            TypeAnnotation::String => "StringTypeAnnotation",
            TypeAnnotation::Int32 => "Int32TypeAnnotation",
            TypeAnnotation::Double => "DoubleTypeAnnotation",
            TypeAnnotation::Float => "FloatTypeAnnotation",
            TypeAnnotation::Object => "ObjectTypeAnnotation",
            TypeAnnotation::StringEnum => "StringEnumTypeAnnotation",
            TypeAnnotation::Int32Enum => "Int32EnumTypeAnnotation",
            TypeAnnotation::Reserved(_) => "ReservedPropTypeAnnotation",
            TypeAnnotation::Array(_) => "ArrayTypeAnnotation",
        }
    }
}

/// JSON shape of a type annotation. Extra keys (defaults, enum options,
/// object properties) are not needed for view configs and are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeAnnotation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<RawTypeAnnotation>>,
}

impl RawTypeAnnotation {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            element_type: None,
        }
    }
}

impl TryFrom<RawTypeAnnotation> for TypeAnnotation {
    type Error = ViewgenError;

    fn try_from(raw: RawTypeAnnotation) -> Result<Self> {
        let annotation = match raw.kind.as_str() {
            "BooleanTypeAnnotation" => TypeAnnotation::Boolean,
            "StringTypeAnnotation" => TypeAnnotation::String,
            "Int32TypeAnnotation" => TypeAnnotation::Int32,
            "DoubleTypeAnnotation" => TypeAnnotation::Double,
            "FloatTypeAnnotation" => TypeAnnotation::Float,
            "ObjectTypeAnnotation" => TypeAnnotation::Object,
            "StringEnumTypeAnnotation" => TypeAnnotation::StringEnum,
            "Int32EnumTypeAnnotation" => TypeAnnotation::Int32Enum,
            "ReservedPropTypeAnnotation" => {
                let name = raw
                    .name
                    .ok_or_else(|| ViewgenError::missing_field("ReservedPropTypeAnnotation.name"))?;
                let primitive = name
                    .parse::<ReservedPrimitive>()
                    .map_err(|_| ViewgenError::unknown_type_annotation(name.as_str()))?;
                TypeAnnotation::Reserved(primitive)
            }
            "ArrayTypeAnnotation" => {
                let element_type = raw
                    .element_type
                    .ok_or_else(|| ViewgenError::missing_field("ArrayTypeAnnotation.elementType"))?;
                TypeAnnotation::Array(Box::new(TypeAnnotation::try_from(*element_type)?))
            }
            other => return Err(ViewgenError::unknown_type_annotation(other)),
        };
        Ok(annotation)
    }
}

impl From<TypeAnnotation> for RawTypeAnnotation {
    fn from(annotation: TypeAnnotation) -> Self {
        let mut raw = RawTypeAnnotation::new(annotation.tag());
        match annotation {
            TypeAnnotation::Reserved(primitive) => raw.name = Some(primitive.to_string()),
            TypeAnnotation::Array(element_type) => {
                raw.element_type = Some(Box::new(RawTypeAnnotation::from(*element_type)));
            }
            TypeAnnotation::Boolean
            | TypeAnnotation::String
            | TypeAnnotation::Int32
            | TypeAnnotation::Double
            | TypeAnnotation::Float
            | TypeAnnotation::Object
            | TypeAnnotation::StringEnum
            | TypeAnnotation::Int32Enum => {}
        }
        raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BubblingType {
    Bubble,
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub bubbling_type: BubblingType,
    /// Legacy top-level name. When set it replaces the normalized name as the
    /// registration key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_top_level_name_deprecated: Option<String>,
}

impl Event {
    pub fn bubble(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbling_type: BubblingType::Bubble,
            paper_top_level_name_deprecated: None,
        }
    }

    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbling_type: BubblingType::Direct,
            paper_top_level_name_deprecated: None,
        }
    }

    pub fn with_deprecated_top_level_name(mut self, name: impl Into<String>) -> Self {
        self.paper_top_level_name_deprecated = Some(name.into());
        self
    }

    pub fn deprecated_top_level_name(&self) -> Option<&str> {
        self.paper_top_level_name_deprecated
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub name: String,
    pub type_annotation: CommandTypeAnnotation,
}

impl Command {
    pub fn new<P: Into<String>>(name: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        Self {
            name: name.into(),
            type_annotation: CommandTypeAnnotation {
                params: params
                    .into_iter()
                    .map(|name| CommandParam { name: name.into() })
                    .collect(),
            },
        }
    }

    pub fn without_params(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: CommandTypeAnnotation::default(),
        }
    }

    pub fn params(&self) -> &[CommandParam] {
        &self.type_annotation.params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandTypeAnnotation {
    #[serde(default)]
    pub params: Vec<CommandParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandParam {
    pub name: String,
}

/// Base registries a component's props may extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum KnownTypeName {
    ReactNativeCoreViewProps,
}

/// An `extendsProps` entry. Closed: anything other than a recognized
/// built-in base is rejected with [`ViewgenError::InvalidInheritance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "RawExtendsProps")]
pub enum ExtendsProps {
    BuiltIn(KnownTypeName),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtendsProps {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub known_type_name: String,
}

impl TryFrom<RawExtendsProps> for ExtendsProps {
    type Error = ViewgenError;

    fn try_from(raw: RawExtendsProps) -> Result<Self> {
        match raw.kind.as_str() {
            "ReactNativeBuiltInType" => raw
                .known_type_name
                .parse::<KnownTypeName>()
                .map(ExtendsProps::BuiltIn)
                .map_err(|_| ViewgenError::invalid_inheritance(raw.kind.as_str(), raw.known_type_name.as_str())),
            _ => Err(ViewgenError::invalid_inheritance(raw.kind, raw.known_type_name)),
        }
    }
}

impl From<ExtendsProps> for RawExtendsProps {
    fn from(entry: ExtendsProps) -> Self {
        match entry {
            ExtendsProps::BuiltIn(known_type_name) => RawExtendsProps {
                kind: "ReactNativeBuiltInType".to_string(),
                known_type_name: known_type_name.to_string(),
            },
        }
    }
}

/// JSON shape of a whole schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSchema {
    pub modules: OrderedMap<RawModule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum RawModule {
    Component { components: OrderedMap<RawComponent> },
    #[serde(other)]
    Other,
}

/// JSON shape of a component. Props and inheritance entries stay raw until
/// [`Component::try_from`] checks them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponent {
    #[serde(default)]
    pub props: Vec<RawProp>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub extends_props: Vec<RawExtendsProps>,
    #[serde(default)]
    pub paper_component_name: Option<String>,
    #[serde(default)]
    pub paper_component_name_deprecated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProp {
    pub name: String,
    pub type_annotation: RawTypeAnnotation,
}

impl TryFrom<RawSchema> for Schema {
    type Error = ViewgenError;

    fn try_from(raw: RawSchema) -> Result<Self> {
        let modules = raw
            .modules
            .into_iter()
            .map(|(name, module)| Module::try_from(module).map(|module| (name, module)))
            .collect::<Result<OrderedMap<Module>>>()?;
        Ok(Schema { modules })
    }
}

impl TryFrom<RawModule> for Module {
    type Error = ViewgenError;

    fn try_from(raw: RawModule) -> Result<Self> {
        match raw {
            RawModule::Component { components } => {
                let components = components
                    .into_iter()
                    .map(|(name, component)| {
                        trace!(component = %name, "Converting component");
                        Component::try_from(component).map(|component| (name, component))
                    })
                    .collect::<Result<OrderedMap<Component>>>()?;
                Ok(Module::Component { components })
            }
            RawModule::Other => Ok(Module::Other),
        }
    }
}

impl TryFrom<RawComponent> for Component {
    type Error = ViewgenError;

    fn try_from(raw: RawComponent) -> Result<Self> {
        let props = raw
            .props
            .into_iter()
            .map(|prop| TypeAnnotation::try_from(prop.type_annotation).map(|annotation| Prop::new(prop.name, annotation)))
            .collect::<Result<Vec<_>>>()?;
        let extends_props = raw
            .extends_props
            .into_iter()
            .map(ExtendsProps::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Component {
            props,
            events: raw.events,
            commands: raw.commands,
            extends_props,
            paper_component_name: raw.paper_component_name,
            paper_component_name_deprecated: raw.paper_component_name_deprecated,
        })
    }
}
