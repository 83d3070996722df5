//! Document objects
//!
//! [`ObjectType`] is the payload stored in every arena slot. It is a
//! tagged union over all kinds the document manages: the drawable entities,
//! the structural tables and the non-graphical objects defined in this
//! module (dictionaries, typed values, fonts, commands, applications and
//! classification info).

mod application;
mod classification;
mod command;
mod dictionary;
mod font;
mod typed_value;

pub use application::{AppVersion, Application};
pub use classification::{ClassificationEntry, ClassificationInfo};
pub use command::{Command, CommandState};
pub use dictionary::Dictionary;
pub use font::Font;
pub use typed_value::{TypedValue, TypedValueType};

use crate::entities::{EntityCommon, Group, Image, Rectangle};
use crate::tables::{Layer, LayerInstance, Page};
use crate::types::RefType;

/// Payload of one document object
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectType {
    Image(Image),
    Group(Group),
    Rectangle(Rectangle),
    Layer(Layer),
    LayerInstance(LayerInstance),
    Page(Page),
    Dictionary(Dictionary),
    TypedValue(TypedValue),
    Font(Font),
    Command(Command),
    Application(Application),
    ClassificationInfo(ClassificationInfo),
}

impl ObjectType {
    /// Runtime tag of this payload
    pub fn ref_type(&self) -> RefType {
        match self {
            ObjectType::Image(_) => RefType::Image,
            ObjectType::Group(_) => RefType::Group,
            ObjectType::Rectangle(_) => RefType::Rectangle,
            ObjectType::Layer(_) => RefType::Layer,
            ObjectType::LayerInstance(_) => RefType::LayerInstance,
            ObjectType::Page(_) => RefType::Page,
            ObjectType::Dictionary(_) => RefType::Dictionary,
            ObjectType::TypedValue(_) => RefType::TypedValue,
            ObjectType::Font(_) => RefType::Font,
            ObjectType::Command(_) => RefType::Command,
            ObjectType::Application(_) => RefType::Application,
            ObjectType::ClassificationInfo(_) => RefType::ClassificationInfo,
        }
    }

    /// Entity data, for drawable kinds only
    pub fn common(&self) -> Option<&EntityCommon> {
        match self {
            ObjectType::Image(e) => Some(&e.common),
            ObjectType::Group(e) => Some(&e.common),
            ObjectType::Rectangle(e) => Some(&e.common),
            _ => None,
        }
    }

    pub(crate) fn common_mut(&mut self) -> Option<&mut EntityCommon> {
        match self {
            ObjectType::Image(e) => Some(&mut e.common),
            ObjectType::Group(e) => Some(&mut e.common),
            ObjectType::Rectangle(e) => Some(&mut e.common),
            _ => None,
        }
    }

    /// Check if this payload is a drawable entity
    pub fn is_entity(&self) -> bool {
        self.ref_type().is_drawable()
    }
}
