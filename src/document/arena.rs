//! Generational object arena
//!
//! Every document object lives in one slot. A slot's generation is bumped
//! when its object is destroyed and the index goes on the free list, so a
//! handle issued before the destroy no longer resolves even after the index
//! is reused.

use crate::entities::{Group, Image, Rectangle};
use crate::objects::{
    Application, ClassificationInfo, Command, Dictionary, Font, ObjectType, TypedValue,
};
use crate::tables::{Layer, LayerInstance, Page};
use crate::types::{
    ApplicationRef, ClassificationInfoRef, CommandRef, DictionaryRef, FontRef, GroupRef, Handle,
    ImageRef, LayerInstanceRef, LayerRef, ObjectRef, PageRef, RectangleRef, TypedValueRef,
};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) ref_count: u32,
    pub(crate) object: Option<ObjectType>,
    /// Attribute dictionaries attached to this object, by name
    pub(crate) dictionaries: IndexMap<String, DictionaryRef>,
}

/// Everything a destroyed slot held
pub(crate) struct Removed {
    pub(crate) object: ObjectType,
    pub(crate) dictionaries: IndexMap<String, DictionaryRef>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    created: u64,
    destroyed: u64,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    /// Store an object with a reference count of one
    pub(crate) fn insert(&mut self, object: ObjectType) -> Handle {
        self.created += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.ref_count = 1;
            slot.object = Some(object);
            return Handle::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            ref_count: 1,
            object: Some(object),
            dictionaries: IndexMap::new(),
        });
        Handle::new(index, 1)
    }

    pub(crate) fn slot(&self, handle: Handle) -> Option<&Slot> {
        if handle.is_null() {
            return None;
        }
        self.slots
            .get(handle.index() as usize)
            .filter(|s| s.generation == handle.generation() && s.object.is_some())
    }

    pub(crate) fn slot_mut(&mut self, handle: Handle) -> Option<&mut Slot> {
        if handle.is_null() {
            return None;
        }
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|s| s.generation == handle.generation() && s.object.is_some())
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&ObjectType> {
        self.slot(handle).and_then(|s| s.object.as_ref())
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut ObjectType> {
        self.slot_mut(handle).and_then(|s| s.object.as_mut())
    }

    pub(crate) fn is_alive(&self, handle: Handle) -> bool {
        self.slot(handle).is_some()
    }

    /// Take the object out and retire the handle
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<Removed> {
        let slot = self.slot_mut(handle)?;
        let object = slot.object.take()?;
        let dictionaries = std::mem::take(&mut slot.dictionaries);
        slot.ref_count = 0;
        slot.generation = match slot.generation.wrapping_add(1) {
            0 => 1,
            g => g,
        };
        self.free.push(handle.index());
        self.destroyed += 1;
        Some(Removed {
            object,
            dictionaries,
        })
    }

    pub(crate) fn created(&self) -> u64 {
        self.created
    }

    pub(crate) fn destroyed(&self) -> u64 {
        self.destroyed
    }

    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

/// Maps a typed reference to the payload it points at
pub trait Payload: ObjectRef {
    type Target;

    fn payload(object: &ObjectType) -> Option<&Self::Target>;

    fn payload_mut(object: &mut ObjectType) -> Option<&mut Self::Target>;
}

macro_rules! impl_payload {
    ($($r:ty => $variant:ident($target:ty)),* $(,)?) => {
        $(
            impl Payload for $r {
                type Target = $target;

                fn payload(object: &ObjectType) -> Option<&$target> {
                    match object {
                        ObjectType::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn payload_mut(object: &mut ObjectType) -> Option<&mut $target> {
                    match object {
                        ObjectType::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_payload!(
    ImageRef => Image(Image),
    GroupRef => Group(Group),
    RectangleRef => Rectangle(Rectangle),
    LayerRef => Layer(Layer),
    LayerInstanceRef => LayerInstance(LayerInstance),
    PageRef => Page(Page),
    DictionaryRef => Dictionary(Dictionary),
    TypedValueRef => TypedValue(TypedValue),
    FontRef => Font(Font),
    CommandRef => Command(Command),
    ApplicationRef => Application(Application),
    ClassificationInfoRef => ClassificationInfo(ClassificationInfo),
);
