//! Event name normalization and bubbling/direct registration.

use super::imports::{Import, Imports};
use crate::js::{Expr, Member};
use crate::schema::{BubblingType, Event};
use tracing::trace;

/// Canonical top-level event name.
///
/// `onX` becomes `topX`, names already starting with `top` are kept, and any
/// other name is prefixed with `top` after uppercasing its first letter.
pub fn normalize_input_event_name(name: &str) -> String {
    if let Some(rest) = name.strip_prefix("on") {
        format!("top{rest}")
    } else if !name.starts_with("top") {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("top{}{}", first.to_uppercase(), chars.as_str()),
            None => "top".to_string(),
        }
    } else {
        name.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRegistration {
    Bubbling {
        top_level_name: String,
        captured: String,
        bubbled: String,
    },
    Direct {
        top_level_name: String,
        registration_name: String,
    },
}

impl EventRegistration {
    pub fn top_level_name(&self) -> &str {
        match self {
            EventRegistration::Bubbling { top_level_name, .. }
            | EventRegistration::Direct { top_level_name, .. } => top_level_name,
        }
    }

    pub fn is_bubbling(&self) -> bool {
        matches!(self, EventRegistration::Bubbling { .. })
    }

    /// `top-level name: { ...registration names }` entry of an event types map.
    pub fn to_member(&self) -> Member {
        match self {
            EventRegistration::Bubbling {
                top_level_name,
                captured,
                bubbled,
            } => Member::prop(
                top_level_name.as_str(),
                Expr::Object(vec![Member::prop(
                    "phasedRegistrationNames",
                    Expr::Object(vec![
                        Member::prop("captured", Expr::str(captured.as_str())),
                        Member::prop("bubbled", Expr::str(bubbled.as_str())),
                    ]),
                )]),
            ),
            EventRegistration::Direct {
                top_level_name,
                registration_name,
            } => Member::prop(
                top_level_name.as_str(),
                Expr::Object(vec![Member::prop(
                    "registrationName",
                    Expr::str(registration_name.as_str()),
                )]),
            ),
        }
    }
}

/// Classifies an event. A deprecated top-level name replaces the key only;
/// registration names always come from the raw event name.
pub fn classify(event: &Event) -> EventRegistration {
    let top_level_name = match event.deprecated_top_level_name() {
        Some(deprecated) => deprecated.to_string(),
        None => normalize_input_event_name(&event.name),
    };
    trace!(event = %event.name, top_level_name = %top_level_name, "Classified event");

    match event.bubbling_type {
        BubblingType::Bubble => EventRegistration::Bubbling {
            top_level_name,
            captured: format!("{}Capture", event.name),
            bubbled: event.name.clone(),
        },
        BubblingType::Direct => EventRegistration::Direct {
            top_level_name,
            registration_name: event.name.clone(),
        },
    }
}

/// The `...ConditionallyIgnoredEventHandlers({...})` spread for a component's
/// valid attributes. `None` when the component has no events.
pub fn event_attributes(events: &[Event], imports: &mut Imports) -> Option<Member> {
    if events.is_empty() {
        return None;
    }
    imports.add(Import::ConditionallyIgnoredEventHandlers);

    let handlers = events
        .iter()
        .map(|event| Member::prop(event.name.as_str(), Expr::Bool(true)))
        .collect();
    Some(Member::Spread(Expr::call(
        Import::ConditionallyIgnoredEventHandlers.binding(),
        vec![Expr::Object(handlers)],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js::print_expr;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_on_prefix() {
        assert_eq!(normalize_input_event_name("onPress"), "topPress");
        assert_eq!(normalize_input_event_name("onChange"), "topChange");
    }

    #[test]
    fn test_normalize_top_prefix_is_kept() {
        assert_eq!(normalize_input_event_name("topChange"), "topChange");
    }

    #[test]
    fn test_normalize_bare_name() {
        assert_eq!(normalize_input_event_name("press"), "topPress");
        assert_eq!(normalize_input_event_name("x"), "topX");
        assert_eq!(normalize_input_event_name(""), "top");
    }

    #[test]
    fn test_normalize_on_wins_over_capitalization() {
        // `one` starts with `on`, so only the prefix is swapped.
        assert_eq!(normalize_input_event_name("one"), "tope");
    }

    proptest! {
        #[test]
        fn prop_on_prefix_is_replaced(rest in "[A-Za-z0-9]{0,12}") {
            let name = format!("on{rest}");
            prop_assert_eq!(normalize_input_event_name(&name), format!("top{rest}"));
        }

        #[test]
        fn prop_top_prefix_is_identity(rest in "[A-Za-z0-9]{0,12}") {
            let name = format!("top{rest}");
            prop_assert_eq!(normalize_input_event_name(&name), name.clone());
        }

        #[test]
        fn prop_normalization_is_idempotent(name in "[A-Za-z][A-Za-z0-9]{0,12}") {
            let once = normalize_input_event_name(&name);
            prop_assert_eq!(normalize_input_event_name(&once), once.clone());
        }
    }

    #[test]
    fn test_classify_bubbling() {
        assert_eq!(
            classify(&Event::bubble("onChange")),
            EventRegistration::Bubbling {
                top_level_name: "topChange".to_string(),
                captured: "onChangeCapture".to_string(),
                bubbled: "onChange".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_direct() {
        assert_eq!(
            classify(&Event::direct("onLoad")),
            EventRegistration::Direct {
                top_level_name: "topLoad".to_string(),
                registration_name: "onLoad".to_string(),
            }
        );
    }

    #[test]
    fn test_deprecated_name_replaces_key_only() {
        let registration =
            classify(&Event::bubble("onChange").with_deprecated_top_level_name("paperChange"));
        assert_eq!(registration.top_level_name(), "paperChange");
        assert_eq!(
            registration,
            EventRegistration::Bubbling {
                top_level_name: "paperChange".to_string(),
                captured: "onChangeCapture".to_string(),
                bubbled: "onChange".to_string(),
            }
        );

        let direct = classify(&Event::direct("onEnd").with_deprecated_top_level_name("paperEnd"));
        assert_eq!(
            direct,
            EventRegistration::Direct {
                top_level_name: "paperEnd".to_string(),
                registration_name: "onEnd".to_string(),
            }
        );
    }

    #[test]
    fn test_event_attributes_absent_without_events() {
        let mut imports = Imports::new();
        assert_eq!(event_attributes(&[], &mut imports), None);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_event_attributes_wraps_every_raw_name() {
        let mut imports = Imports::new();
        let events = [Event::bubble("onChange"), Event::direct("onLoad")];
        let member = event_attributes(&events, &mut imports).unwrap();
        assert!(imports.contains(Import::ConditionallyIgnoredEventHandlers));

        let rendered = print_expr(&Expr::Object(vec![member]));
        assert_eq!(
            rendered,
            "{\n  ...ConditionallyIgnoredEventHandlers({\n    onChange: true,\n    onLoad: true,\n  }),\n}"
        );
    }

    #[test]
    fn test_bubbling_member_rendering() {
        let member = classify(&Event::bubble("onPress")).to_member();
        assert_eq!(
            print_expr(&Expr::Object(vec![member])),
            "{\n  topPress: {\n    phasedRegistrationNames: {\n      captured: 'onPressCapture',\n      bubbled: 'onPress',\n    },\n  },\n}"
        );
    }
}
