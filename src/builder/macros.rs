//! Macros for declaring named machine types.

/// Declare a machine type whose events are callable methods.
///
/// The macro generates a struct wrapping a
/// [`MachineInstance`](crate::runtime::MachineInstance). The definition is
/// built once, on first use, and shared by every value of the type. Each
/// event becomes a method that dispatches the event by name, and
/// `dispatch(name)` forwards to the instance. The wrapper derefs to the
/// instance, so `state()` and `is_accepted()` are available directly.
///
/// Sources are either a single state or a bracketed list of states.
/// `initial` and `accepting` are optional.
///
/// An event is registered under its identifier, with any `r#` prefix
/// stripped, so `r#loop` declares the event `"loop"`. An explicit name can
/// be given with `ident = "name"` for names that are not Rust identifiers.
///
/// The generated type owns these associated items, so they cannot be used
/// as event identifiers: `new`, `create`, `definition`, `instance`,
/// `into_instance`, `with_initial_state` and `dispatch`. Rename such an
/// event with an explicit name, e.g. `create_order = "create"`.
///
/// The wrapper only derefs immutably. Its instance always runs against the
/// type's own definition, so it cannot be swapped out:
///
/// ```compile_fail
/// use automaton::automaton;
/// use automaton::builder::DefinitionBuilder;
/// use automaton::runtime::MachineInstance;
///
/// automaton! {
///     struct Light {
///         initial: "red",
///         events { go: "red" => "green" }
///     }
/// }
///
/// let foreign = DefinitionBuilder::new()
///     .event("go", "red", "exploded")
///     .initial_state("red")
///     .build()
///     .unwrap();
/// let mut light = Light::new().unwrap();
/// *light = MachineInstance::new(foreign).unwrap();
/// ```
///
/// # Example
///
/// ```
/// use automaton::automaton;
///
/// automaton! {
///     /// A three-phase traffic light.
///     pub struct TrafficLight {
///         initial: "red",
///         accepting: ["red", "green"],
///         events {
///             go: "red" => "green",
///             slowdown: "green" => "yellow",
///             stop: ["yellow"] => "red",
///             r#break = "emergency-stop": ["green", "yellow"] => "red",
///         }
///     }
/// }
///
/// let mut light = TrafficLight::new().unwrap();
/// light.go().unwrap();
/// light.slowdown().unwrap();
/// assert_eq!(light.state(), "yellow");
/// assert!(!light.is_accepted());
/// assert!(light.go().is_err());
///
/// light.r#break().unwrap();
/// light.dispatch("go").unwrap();
/// assert!(light.can_dispatch("emergency-stop"));
/// ```
#[macro_export]
macro_rules! automaton {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(initial: $initial:expr,)?
            $(accepting: [$($accepting:expr),* $(,)?],)?
            events {
                $(
                    $(#[$event_meta:meta])*
                    $event:ident $(= $event_name:literal)? : $sources:tt => $destination:expr
                ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        $vis struct $name {
            instance: $crate::runtime::MachineInstance,
        }

        impl $name {
            /// Definition shared by every value of this type.
            pub fn definition() -> ::std::result::Result<
                ::std::sync::Arc<$crate::core::MachineDefinition>,
                $crate::builder::DefinitionError,
            > {
                static DEFINITION: ::std::sync::OnceLock<
                    ::std::result::Result<
                        ::std::sync::Arc<$crate::core::MachineDefinition>,
                        $crate::builder::DefinitionError,
                    >,
                > = ::std::sync::OnceLock::new();

                DEFINITION
                    .get_or_init(|| {
                        let builder = $crate::builder::DefinitionBuilder::new()
                            $(.event(
                                $crate::__automaton_event_name!($event $(, $event_name)?),
                                $sources,
                                $destination,
                            ))*;
                        $(let builder = builder.initial_state($initial);)?
                        $(
                            let accepting: ::std::vec::Vec<$crate::core::State> =
                                ::std::vec![$($crate::core::State::from($accepting)),*];
                            let builder = builder.accepting_states(accepting);
                        )?
                        builder.build()
                    })
                    .clone()
            }

            /// Create a value in the default initial state.
            pub fn new() -> ::std::result::Result<Self, $crate::builder::DefinitionError> {
                Self::create(None, None)
            }

            /// Create a value in `state`.
            pub fn with_initial_state(
                state: impl Into<$crate::core::State>,
            ) -> ::std::result::Result<Self, $crate::builder::DefinitionError> {
                Self::create(Some(state.into()), None)
            }

            /// Create a value with optional initial and accepting overrides.
            pub fn create(
                initial_state: Option<$crate::core::State>,
                accepting_states: Option<::std::vec::Vec<$crate::core::State>>,
            ) -> ::std::result::Result<Self, $crate::builder::DefinitionError> {
                let instance = $crate::runtime::new_instance(
                    Self::definition()?,
                    initial_state,
                    accepting_states,
                )?;
                Ok(Self { instance })
            }

            pub fn instance(&self) -> &$crate::runtime::MachineInstance {
                &self.instance
            }

            pub fn into_instance(self) -> $crate::runtime::MachineInstance {
                self.instance
            }

            /// Dispatch an event by name.
            pub fn dispatch(
                &mut self,
                event: &str,
            ) -> ::std::result::Result<
                $crate::runtime::Transition,
                $crate::runtime::InvalidTransitionError,
            > {
                self.instance.dispatch(event)
            }

            $(
                $(#[$event_meta])*
                pub fn $event(
                    &mut self,
                ) -> ::std::result::Result<
                    $crate::runtime::Transition,
                    $crate::runtime::InvalidTransitionError,
                > {
                    self.instance
                        .dispatch($crate::__automaton_event_name!($event $(, $event_name)?))
                }
            )*
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::runtime::MachineInstance;

            fn deref(&self) -> &Self::Target {
                &self.instance
            }
        }
    };
}

/// Event name registered for a macro-declared event.
#[doc(hidden)]
#[macro_export]
macro_rules! __automaton_event_name {
    ($event:ident, $name:literal) => {
        $name
    };
    ($event:ident) => {
        $crate::builder::macros::event_name(stringify!($event))
    };
}

#[doc(hidden)]
pub fn event_name(ident: &'static str) -> &'static str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
