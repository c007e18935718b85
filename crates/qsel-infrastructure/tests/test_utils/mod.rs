//! Shared fixtures for infrastructure tests

#![allow(dead_code)]

use std::sync::Arc;

use qsel_domain::{Component, ComponentMetadata, ProvidedObject, Qualifier};

pub trait Service: Component {
    fn id(&self) -> &str;
}

pub trait Unrelated: Component {}

pub struct FixedService {
    pub id: String,
}

impl Component for FixedService {}

impl Service for FixedService {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct TaggedService;

impl Component for TaggedService {
    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new()
            .with_tag(Qualifier::from_static("fast"))
            .with_order(10)
    }
}

impl Service for TaggedService {
    fn id(&self) -> &str {
        "tagged"
    }
}

impl Unrelated for TaggedService {}

pub fn service(id: &str) -> Arc<ProvidedObject> {
    Arc::new(
        ProvidedObject::builder(FixedService { id: id.to_string() })
            .bind::<dyn Service>(|s| s)
            .build(),
    )
}

pub fn tagged_service() -> ProvidedObject {
    ProvidedObject::builder(TaggedService)
        .bind::<dyn Service>(|s| s)
        .bind::<dyn Unrelated>(|s| s)
        .build()
}
