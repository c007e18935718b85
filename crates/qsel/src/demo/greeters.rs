use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use linkme::distributed_slice;
use qsel_application::ports::registry::{COMPONENTS, ComponentEntry};
use qsel_domain::{
    Component, ComponentMetadata, DisposeError, Disposable, ProvidedObject, Qualifier,
};
use tracing::debug;

/// Tag of greeters fit for official correspondence
pub const OFFICIAL: Qualifier = Qualifier::from_static("official");

/// Tag of greeters using a formal salutation
pub const FORMAL: Qualifier = Qualifier::from_static("formal");

/// Tag of greeters with a rural flavour
pub const COUNTRY_STYLE: Qualifier = Qualifier::from_static("country-style");

/// Capability provided by every demo component
pub trait Greeter: Component + fmt::Display {
    /// Greeting addressed to `name`
    fn greet(&self, name: &str) -> String;
}

/// Binds a greeter to `dyn Greeter` and builds its record
fn greeter<C: Greeter>(component: C) -> ProvidedObject {
    ProvidedObject::builder(component)
        .bind::<dyn Greeter>(|g| g)
        .build()
}

macro_rules! display_as {
    ($ty:ty, $text:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($text)
            }
        }
    };
}

// ============================================================================
// simpleGreeter
// ============================================================================

#[derive(Debug, Default)]
pub struct SimpleGreeter;

impl Component for SimpleGreeter {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new().with_tag(OFFICIAL)
    }
}

impl Greeter for SimpleGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello {name}")
    }
}

display_as!(SimpleGreeter, "SimpleGreeter");

#[distributed_slice(COMPONENTS)]
static SIMPLE_GREETER: ComponentEntry = ComponentEntry {
    name: "simpleGreeter",
    description: "Plain official greeting",
    primary: false,
    factory: || greeter(SimpleGreeter),
};

// ============================================================================
// formalGreeter
// ============================================================================

#[derive(Debug, Default)]
pub struct FormalGreeter;

impl Component for FormalGreeter {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new().with_tag(OFFICIAL).with_tag(FORMAL)
    }
}

impl Greeter for FormalGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Good day {name}")
    }
}

display_as!(FormalGreeter, "FormalGreeter");

#[distributed_slice(COMPONENTS)]
static FORMAL_GREETER: ComponentEntry = ComponentEntry {
    name: "formalGreeter",
    description: "Formal official greeting",
    primary: false,
    factory: || greeter(FormalGreeter),
};

// ============================================================================
// priorityGreeter / highestPriorityGreeter
// ============================================================================

#[derive(Debug, Default)]
pub struct PriorityGreeter;

impl Component for PriorityGreeter {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new().with_order(1000)
    }
}

impl Greeter for PriorityGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hi {name}")
    }
}

display_as!(PriorityGreeter, "PriorityGreeter");

#[distributed_slice(COMPONENTS)]
static PRIORITY_GREETER: ComponentEntry = ComponentEntry {
    name: "priorityGreeter",
    description: "Ranked greeting (order 1000)",
    primary: false,
    factory: || greeter(PriorityGreeter),
};

#[derive(Debug, Default)]
pub struct HighestPriorityGreeter;

impl Component for HighestPriorityGreeter {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new().with_order(10_000)
    }
}

impl Greeter for HighestPriorityGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Your highness {name}")
    }
}

display_as!(HighestPriorityGreeter, "HighestPriorityGreeter");

#[distributed_slice(COMPONENTS)]
static HIGHEST_PRIORITY_GREETER: ComponentEntry = ComponentEntry {
    name: "highestPriorityGreeter",
    description: "Highest ranked greeting (order 10000)",
    primary: false,
    factory: || greeter(HighestPriorityGreeter),
};

// ============================================================================
// defaultGreeter
// ============================================================================

#[derive(Debug, Default)]
pub struct DefaultGreeter;

impl Component for DefaultGreeter {}

impl Greeter for DefaultGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello {name}, nice to meet you")
    }
}

display_as!(DefaultGreeter, "DefaultGreeter");

#[distributed_slice(COMPONENTS)]
static DEFAULT_GREETER: ComponentEntry = ComponentEntry {
    name: "defaultGreeter",
    description: "Preferred default greeting",
    primary: true,
    factory: || greeter(DefaultGreeter),
};

// ============================================================================
// countryStyleGreeter
// ============================================================================

/// Greeter holding a "door" that must be closed on disposal
#[derive(Debug, Default)]
pub struct CountryStyleGreeter {
    closed: AtomicBool,
}

impl CountryStyleGreeter {
    /// Whether the greeter has been disposed
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Component for CountryStyleGreeter {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new().with_tag(COUNTRY_STYLE)
    }

    fn disposal(&self) -> Option<&dyn Disposable> {
        Some(self)
    }
}

impl Disposable for CountryStyleGreeter {
    fn dispose(&self) -> Result<(), DisposeError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err("country-style greeter already closed the gate".into());
        }
        debug!("Country-style greeter closed the gate");
        Ok(())
    }
}

impl Greeter for CountryStyleGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Howdy {name}")
    }
}

display_as!(CountryStyleGreeter, "CountryStyleGreeter");

#[distributed_slice(COMPONENTS)]
static COUNTRY_STYLE_GREETER: ComponentEntry = ComponentEntry {
    name: "countryStyleGreeter",
    description: "Country-style greeting, disposable",
    primary: false,
    factory: || greeter(CountryStyleGreeter::default()),
};
