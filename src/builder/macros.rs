//! Macros for declaring workflow state enumerations.

/// Generate a state enum together with its
/// [`State`](crate::core::State) implementation.
///
/// Identifiers are the variant names; the enumeration follows the
/// declaration order.
///
/// # Example
///
/// ```
/// use trellis::core::State;
/// use trellis::workflow_states;
///
/// workflow_states! {
///     pub enum TicketState {
///         Open,
///         InProgress,
///         Resolved,
///     }
/// }
///
/// assert_eq!(TicketState::InProgress.identifier(), "InProgress");
/// assert_eq!(TicketState::enumeration().len(), 3);
/// ```
#[macro_export]
macro_rules! workflow_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn identifier(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn enumeration() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    workflow_states! {
        enum TestState {
            Draft,
            Review,
            Published,
        }
    }

    #[test]
    fn macro_generates_identifiers_from_variant_names() {
        assert_eq!(TestState::Draft.identifier(), "Draft");
        assert_eq!(TestState::Review.identifier(), "Review");
        assert_eq!(TestState::Published.identifier(), "Published");
    }

    #[test]
    fn macro_preserves_declaration_order() {
        assert_eq!(
            TestState::enumeration(),
            &[TestState::Draft, TestState::Review, TestState::Published]
        );
    }

    #[test]
    fn macro_supports_visibility() {
        workflow_states! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        assert_eq!(PublicState::enumeration().len(), 2);
    }

    #[test]
    fn generated_states_serialize_correctly() {
        let state = TestState::Review;
        let json = serde_json::to_string(&state).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
