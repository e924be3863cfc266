//! The typed object model produced by a load.
//!
//! Elements live in one arena per [`AspectModel`] and refer to each other by
//! [`ElementId`]. Stored fields hold only what the graph states about an
//! element; everything inheritance-dependent is a derived view on
//! [`ElementRef`].

pub mod aspect;
pub mod aspect_model;
pub mod characteristic;
pub mod constraint;
pub mod data_type;
pub mod element;
pub mod property;
pub mod unit;
pub mod value;
pub mod view;

pub use aspect::{Aspect, Event, Operation};
pub use aspect_model::AspectModel;
pub use characteristic::{
    Characteristic, CharacteristicKind, CollectionKind, QuantifiableKind, StructuredElement,
};
pub use constraint::{BoundDefinition, Constraint};
pub use data_type::{ComplexType, Scalar};
pub use element::{BaseAttributes, Element, ElementId, ElementKind};
pub use property::Property;
pub use unit::{QuantityKind, Unit};
pub use value::{ScalarValue, Value};
pub use view::ElementRef;
