//! Object factories, reference counting and type dispatch

use super::Document;
use crate::entities::{Image, Rectangle};
use crate::error::{LayoutError, Result};
use crate::io::image::{self, ImageFormat};
use crate::notification::NotificationType;
use crate::objects::{
    AppVersion, Application, ClassificationInfo, Command, Dictionary, Font, ObjectType, TypedValue,
};
use crate::types::{
    ApplicationRef, AxisAlignedRect2D, ClassificationInfoRef, CommandRef, DictionaryRef,
    EntityRef, FontRef, Handle, ImageRef, ObjectRef, RectangleRef, RefType, Shareable,
    TypedValueRef,
};
use std::path::Path;
use tracing::{debug, warn};

impl Document {
    fn insert_object<R: ObjectRef>(&mut self, object: ObjectType) -> R {
        let handle = self.arena.insert(object);
        debug!("Created {} {}", R::REF_TYPE, handle);
        R::from_handle(handle)
    }

    // ---- factories ----

    /// Create a rectangle entity
    ///
    /// Zero width or height is `OutOfRange`, non-finite corners are
    /// `InvalidArgument`.
    pub fn create_rectangle(&mut self, bounds: AxisAlignedRect2D) -> Result<RectangleRef> {
        let bounds = bounds.validated()?;
        Ok(self.insert_object(ObjectType::Rectangle(Rectangle::new(bounds))))
    }

    /// Create an image entity from encoded bytes
    pub fn create_image_from_bytes(
        &mut self,
        data: Vec<u8>,
        bounds: AxisAlignedRect2D,
    ) -> Result<ImageRef> {
        let bounds = bounds.validated()?;
        if data.len() > self.config.max_image_bytes {
            return Err(LayoutError::Serialization(format!(
                "image is {} bytes, limit is {}",
                data.len(),
                self.config.max_image_bytes
            )));
        }
        let header = image::sniff(&data)?;
        Ok(self.insert_object(ObjectType::Image(Image::new(bounds, header, data))))
    }

    /// Create an image entity from a PNG, JPEG, BMP or GIF file
    ///
    /// I/O and decoding failures are `Serialization`. A file whose
    /// extension names another format is accepted with a warning
    /// notification.
    pub fn create_image_from_file(
        &mut self,
        path: impl AsRef<Path>,
        bounds: AxisAlignedRect2D,
    ) -> Result<ImageRef> {
        let path = path.as_ref();
        let bounds = bounds.validated()?;
        let (data, header) = image::read_image_file(path, self.config.max_image_bytes)?;

        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if ImageFormat::from_extension(ext) != Some(header.format) {
                warn!("{} holds {} data", path.display(), header.format);
                self.notifications.notify(
                    NotificationType::Warning,
                    format!("{} holds {} data", path.display(), header.format),
                );
            }
        }

        let image = Image::new(bounds, header, data).with_source_path(path);
        Ok(self.insert_object(ObjectType::Image(image)))
    }

    /// Create a free-standing dictionary
    ///
    /// It becomes an attribute dictionary once passed to
    /// [`Document::add_attribute_dictionary`].
    pub fn create_dictionary(&mut self, name: &str) -> DictionaryRef {
        self.insert_object(ObjectType::Dictionary(Dictionary::new(name)))
    }

    /// Create an empty typed value container
    pub fn create_typed_value(&mut self) -> TypedValueRef {
        self.create_typed_value_with(TypedValue::Empty)
    }

    pub fn create_typed_value_with(&mut self, value: impl Into<TypedValue>) -> TypedValueRef {
        self.insert_object(ObjectType::TypedValue(value.into()))
    }

    pub fn create_font(&mut self, family: &str, point_size: f64) -> Result<FontRef> {
        let font = Font::new(family, point_size)?;
        Ok(self.insert_object(ObjectType::Font(font)))
    }

    pub fn create_command(&mut self, identifier: &str, menu_text: &str) -> Result<CommandRef> {
        let command = Command::new(identifier, menu_text)?;
        Ok(self.insert_object(ObjectType::Command(command)))
    }

    pub fn create_application(
        &mut self,
        name: &str,
        version: AppVersion,
    ) -> Result<ApplicationRef> {
        let app = Application::new(name, version)?;
        Ok(self.insert_object(ObjectType::Application(app)))
    }

    pub fn create_classification_info(&mut self) -> ClassificationInfoRef {
        self.insert_object(ObjectType::ClassificationInfo(ClassificationInfo::new()))
    }

    // ---- reference counting ----

    /// Take an additional reference on a shareable object
    pub fn add_reference<R: Shareable>(&mut self, r: R) -> Result<()> {
        self.check(r)?;
        self.bump(r.handle());
        Ok(())
    }

    /// Take an additional reference through the type-erased view
    ///
    /// Value-like kinds have a single owner and are rejected with
    /// `InvalidArgument`.
    pub fn add_entity_reference(&mut self, entity: EntityRef) -> Result<()> {
        let kind = self.ref_type(entity)?;
        if !kind.is_shareable() {
            return Err(LayoutError::InvalidArgument(format!(
                "{} is value-like and cannot be shared",
                kind
            )));
        }
        self.bump(entity.handle());
        Ok(())
    }

    pub(super) fn bump(&mut self, handle: Handle) {
        if let Some(slot) = self.arena.slot_mut(handle) {
            slot.ref_count += 1;
        }
    }

    /// Release the caller's reference
    ///
    /// The object is destroyed when its count reaches zero. On success the
    /// passed reference is always reset to invalid, even when the object
    /// survives.
    pub fn release<R: ObjectRef>(&mut self, r: &mut R) -> Result<()> {
        if !r.is_valid() {
            warn!("Release of an invalid {} reference", R::REF_TYPE);
            return Err(LayoutError::InvalidInput("handle is invalid".to_string()));
        }
        if let Err(e) = self.check(*r) {
            warn!("Release of {} failed: {}", r.handle(), e);
            return Err(e);
        }
        self.release_checked(r.handle())?;
        *r = R::invalid();
        Ok(())
    }

    /// Release the caller's reference through the type-erased view
    pub fn release_entity(&mut self, entity: &mut EntityRef) -> Result<()> {
        if let Err(e) = self.object(entity.handle()) {
            warn!("Release of {} failed: {}", entity, e);
            return Err(e);
        }
        self.release_checked(entity.handle())?;
        *entity = EntityRef::invalid();
        Ok(())
    }

    fn release_checked(&mut self, handle: Handle) -> Result<()> {
        let count = self.arena.slot(handle).map_or(0, |s| s.ref_count);
        if count == 1 {
            if let Some(owner) = self.structural_owner(handle) {
                return Err(LayoutError::Generic(format!(
                    "the last reference to {} is held by {}",
                    handle, owner
                )));
            }
        }
        self.release_handles(vec![handle]);
        Ok(())
    }

    /// Who besides callers holds a reference to this object, if anyone
    fn structural_owner(&self, handle: Handle) -> Option<String> {
        match self.arena.get(handle)? {
            ObjectType::Layer(_) | ObjectType::Page(_) => Some("the document".to_string()),
            ObjectType::LayerInstance(i) => Some(format!("layer {}", i.layer())),
            ObjectType::Dictionary(d) => d.owner().map(|h| format!("object {}", h)),
            other => other
                .common()
                .and_then(|c| c.container())
                .map(|c| format!("{:?}", c)),
        }
    }

    /// Drop one reference from each handle, destroying what reaches zero
    pub(crate) fn release_handles(&mut self, handles: Vec<Handle>) {
        let mut pending = handles;
        while let Some(handle) = pending.pop() {
            let Some(slot) = self.arena.slot_mut(handle) else {
                continue;
            };
            slot.ref_count = slot.ref_count.saturating_sub(1);
            if slot.ref_count == 0 {
                self.destroy_into(handle, &mut pending);
            }
        }
    }

    /// Destroy an object regardless of its count; every alias goes stale
    pub(crate) fn force_destroy(&mut self, handle: Handle) {
        let mut pending = Vec::new();
        self.destroy_into(handle, &mut pending);
        self.release_handles(pending);
    }

    /// Destroy one object, queueing the references it held for release
    fn destroy_into(&mut self, handle: Handle, pending: &mut Vec<Handle>) {
        let Some(removed) = self.arena.remove(handle) else {
            return;
        };
        debug!("Destroyed {} {}", removed.object.ref_type(), handle);

        for dictionary in removed.dictionaries.into_values() {
            if let Some(ObjectType::Dictionary(d)) = self.arena.get_mut(dictionary.handle()) {
                d.owner = Handle::NULL;
            }
            pending.push(dictionary.handle());
        }

        match removed.object {
            ObjectType::Group(group) => self.detach_members(group.children, pending),
            ObjectType::LayerInstance(instance) => {
                self.detach_members(instance.entities, pending)
            }
            ObjectType::Layer(layer) => {
                for instance in layer.instances {
                    self.destroy_into(instance.handle(), pending);
                }
            }
            _ => {}
        }
    }

    fn detach_members(&mut self, members: Vec<EntityRef>, pending: &mut Vec<Handle>) {
        for member in members {
            if let Some(common) = self
                .arena
                .get_mut(member.handle())
                .and_then(ObjectType::common_mut)
            {
                common.container = None;
            }
            pending.push(member.handle());
        }
    }

    // ---- type dispatch ----

    /// Narrow an entity reference to a concrete kind
    ///
    /// Returns the invalid reference when the entity is dead or of another
    /// kind. On success both references alias the same object; no count
    /// changes.
    pub fn downcast<R: ObjectRef>(&self, entity: EntityRef) -> R {
        self.try_downcast(entity).unwrap_or_else(R::invalid)
    }

    pub fn try_downcast<R: ObjectRef>(&self, entity: EntityRef) -> Option<R> {
        match self.arena.get(entity.handle()) {
            Some(object) if object.ref_type() == R::REF_TYPE => {
                Some(R::from_handle(entity.handle()))
            }
            _ => None,
        }
    }

    /// Check if an entity reference points at a live object of `kind`
    pub fn is_kind(&self, entity: EntityRef, kind: RefType) -> bool {
        self.arena
            .get(entity.handle())
            .map_or(false, |o| o.ref_type() == kind)
    }
}
