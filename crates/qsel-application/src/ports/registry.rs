//! Component Registration
//!
//! Components register themselves at compile time through a `linkme`
//! distributed slice and are imported into a provider registry at startup.
//!
//! ## Registering a Component
//!
//! ```ignore
//! use qsel_application::ports::registry::{ComponentEntry, COMPONENTS};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static FORMAL_GREETER: ComponentEntry = ComponentEntry {
//!     name: "formalGreeter",
//!     description: "Greets with a formal salutation",
//!     primary: false,
//!     factory: || ProvidedObject::builder(FormalGreeter).bind::<dyn Greeter>(|g| g).build(),
//! };
//! ```
//!
//! Link order decides slice order, so importers should not rely on it.

use qsel_domain::ProvidedObject;

/// Registry entry for a component
pub struct ComponentEntry {
    /// Unique component name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Whether the component is the preferred default for its capabilities
    pub primary: bool,
    /// Factory creating the provided object
    pub factory: fn() -> ProvidedObject,
}

/// Every component registered at compile time
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

/// List all registered components as `(name, description)` pairs, sorted by name
pub fn list_components() -> Vec<(&'static str, &'static str)> {
    let mut components: Vec<(&'static str, &'static str)> = COMPONENTS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    components.sort_unstable_by_key(|(name, _)| *name);
    components
}

/// Find a registered component by name
pub fn find_component(name: &str) -> Option<&'static ComponentEntry> {
    COMPONENTS.iter().find(|entry| entry.name == name)
}
