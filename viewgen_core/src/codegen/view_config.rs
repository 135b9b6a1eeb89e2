//! Per-component view configuration descriptor.

use super::events::{EventRegistration, classify, event_attributes};
use super::imports::{Import, Imports};
use super::type_mapper::{Validator, map_prop_type};
use crate::error::Result;
use crate::js::{Expr, Member};
use crate::schema::{Component, ExtendsProps, KnownTypeName};
use tracing::{debug, trace};

/// The descriptor a host uses to validate, diff and dispatch for one native
/// component.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub ui_view_class_name: String,
    pub bubbling_event_types: Vec<EventRegistration>,
    pub direct_event_types: Vec<EventRegistration>,
    pub valid_attributes: Vec<(String, Validator)>,
    /// Spread of conditionally ignored event handlers; present iff the
    /// component declares events.
    pub event_attributes: Option<Member>,
}

impl ViewConfig {
    /// Object literal with keys in host order: class name, bubbling events,
    /// direct events, valid attributes. Empty event maps are omitted.
    pub fn to_expr(&self) -> Expr {
        let mut properties = vec![Member::prop(
            "uiViewClassName",
            Expr::str(self.ui_view_class_name.as_str()),
        )];

        if !self.bubbling_event_types.is_empty() {
            properties.push(Member::prop(
                "bubblingEventTypes",
                Expr::Object(self.bubbling_event_types.iter().map(EventRegistration::to_member).collect()),
            ));
        }
        if !self.direct_event_types.is_empty() {
            properties.push(Member::prop(
                "directEventTypes",
                Expr::Object(self.direct_event_types.iter().map(EventRegistration::to_member).collect()),
            ));
        }

        let mut attributes: Vec<Member> = self
            .valid_attributes
            .iter()
            .map(|(name, validator)| Member::prop(name.as_str(), validator.to_expr()))
            .collect();
        attributes.extend(self.event_attributes.iter().cloned());
        properties.push(Member::prop("validAttributes", Expr::Object(attributes)));

        Expr::Object(properties)
    }
}

/// Registers the imports the component's base props need.
pub fn resolve_inheritance(extends_props: &[ExtendsProps], imports: &mut Imports) {
    for entry in extends_props {
        match entry {
            ExtendsProps::BuiltIn(KnownTypeName::ReactNativeCoreViewProps) => {
                imports.add(Import::NativeComponentRegistry);
            }
        }
    }
}

/// Builds the descriptor for `component`, registered under `class_name`.
pub fn build_view_config(
    class_name: &str,
    component: &Component,
    imports: &mut Imports,
) -> Result<ViewConfig> {
    resolve_inheritance(&component.extends_props, imports);

    let valid_attributes = component
        .props
        .iter()
        .map(|prop| {
            trace!(prop = %prop.name, "Mapping prop");
            map_prop_type(&prop.type_annotation, imports).map(|validator| (prop.name.clone(), validator))
        })
        .collect::<Result<Vec<_>>>()?;

    let (bubbling_event_types, direct_event_types): (Vec<_>, Vec<_>) = component
        .events
        .iter()
        .map(classify)
        .partition(EventRegistration::is_bubbling);

    debug!(
        class_name,
        prop_count = valid_attributes.len(),
        bubbling_event_count = bubbling_event_types.len(),
        direct_event_count = direct_event_types.len(),
        "Built view config"
    );

    Ok(ViewConfig {
        ui_view_class_name: class_name.to_string(),
        bubbling_event_types,
        direct_event_types,
        valid_attributes,
        event_attributes: event_attributes(&component.events, imports),
    })
}
