//! Attribute dictionaries and typed values
//!
//! Any object except dictionaries and typed values can carry named
//! attribute dictionaries. An attached dictionary belongs to its object:
//! the object holds one reference and releases it when destroyed.

use super::Document;
use crate::error::{LayoutError, Result};
use crate::objects::{Dictionary, ObjectType, TypedValue};
use crate::types::{DictionaryRef, EntityRef, Handle, ObjectRef, TypedValueRef};
use tracing::debug;

impl Document {
    /// Check that an object may carry attribute dictionaries
    fn attribute_host(&self, entity: EntityRef) -> Result<()> {
        match self.object(entity.handle())? {
            ObjectType::Dictionary(_) | ObjectType::TypedValue(_) => {
                Err(LayoutError::InvalidArgument(format!(
                    "{} cannot carry attribute dictionaries",
                    self.ref_type(entity)?
                )))
            }
            _ => Ok(()),
        }
    }

    fn check_dictionary_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "dictionary name is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the named attribute dictionary, creating it when absent
    ///
    /// The returned reference is borrowed from the entity, which holds the
    /// dictionary's only reference.
    pub fn attribute_dictionary(
        &mut self,
        entity: impl Into<EntityRef>,
        name: &str,
    ) -> Result<DictionaryRef> {
        let entity = entity.into();
        self.attribute_host(entity)?;
        Self::check_dictionary_name(name)?;
        if let Some(existing) = self
            .arena
            .slot(entity.handle())
            .and_then(|s| s.dictionaries.get(name))
        {
            return Ok(*existing);
        }

        let mut dictionary = Dictionary::new(name);
        dictionary.owner = entity.handle();
        let r = DictionaryRef::from_handle(self.arena.insert(ObjectType::Dictionary(dictionary)));
        if let Some(slot) = self.arena.slot_mut(entity.handle()) {
            slot.dictionaries.insert(name.to_string(), r);
        }
        debug!("Created attribute dictionary '{}' on {}", name, entity);
        Ok(r)
    }

    /// Look up an attached dictionary; `NoData` when absent
    pub fn find_attribute_dictionary(
        &self,
        entity: impl Into<EntityRef>,
        name: &str,
    ) -> Result<DictionaryRef> {
        let entity = entity.into();
        self.attribute_host(entity)?;
        self.arena
            .slot(entity.handle())
            .and_then(|s| s.dictionaries.get(name))
            .copied()
            .ok_or_else(|| {
                LayoutError::NoData(format!("{} has no dictionary '{}'", entity, name))
            })
    }

    /// Attach a free-standing dictionary under its own name
    ///
    /// On success the caller's reference now belongs to the entity.
    /// Fails with `Duplicate` when the entity already has a dictionary of
    /// that name, and `InvalidArgument` for an empty name or a dictionary
    /// already attached elsewhere.
    pub fn add_attribute_dictionary(
        &mut self,
        entity: impl Into<EntityRef>,
        dictionary: DictionaryRef,
    ) -> Result<()> {
        let entity = entity.into();
        self.attribute_host(entity)?;
        let dict = self.get(dictionary)?;
        Self::check_dictionary_name(dict.name())?;
        if let Some(owner) = dict.owner() {
            return Err(LayoutError::InvalidArgument(format!(
                "{} is already attached to {}",
                dictionary, owner
            )));
        }
        let name = dict.name().to_string();
        if self
            .arena
            .slot(entity.handle())
            .map_or(false, |s| s.dictionaries.contains_key(&name))
        {
            return Err(LayoutError::Duplicate(format!(
                "{} already has a dictionary '{}'",
                entity, name
            )));
        }

        self.get_mut(dictionary)?.owner = entity.handle();
        if let Some(slot) = self.arena.slot_mut(entity.handle()) {
            slot.dictionaries.insert(name, dictionary);
        }
        Ok(())
    }

    /// Detach and release a named dictionary; `NoData` when absent
    pub fn remove_attribute_dictionary(
        &mut self,
        entity: impl Into<EntityRef>,
        name: &str,
    ) -> Result<()> {
        let entity = entity.into();
        let dictionary = self.find_attribute_dictionary(entity, name)?;
        if let Some(slot) = self.arena.slot_mut(entity.handle()) {
            slot.dictionaries.shift_remove(name);
        }
        self.get_mut(dictionary)?.owner = Handle::NULL;
        self.release_handles(vec![dictionary.handle()]);
        Ok(())
    }

    /// Names of the attached dictionaries, in attach order
    pub fn attribute_dictionary_names(&self, entity: impl Into<EntityRef>) -> Result<Vec<String>> {
        let entity = entity.into();
        self.attribute_host(entity)?;
        Ok(self
            .arena
            .slot(entity.handle())
            .map(|s| s.dictionaries.keys().cloned().collect())
            .unwrap_or_default())
    }

    pub fn attribute_dictionary_count(&self, entity: impl Into<EntityRef>) -> Result<usize> {
        let entity = entity.into();
        self.attribute_host(entity)?;
        Ok(self
            .arena
            .slot(entity.handle())
            .map_or(0, |s| s.dictionaries.len()))
    }

    // ---- dictionary values ----

    /// Insert or overwrite a value, copying it out of a typed value
    pub fn dictionary_set_value(
        &mut self,
        dictionary: DictionaryRef,
        key: &str,
        value: TypedValueRef,
    ) -> Result<()> {
        self.check(dictionary)?;
        let value = self.get(value)?.clone();
        self.get_mut(dictionary)?.set(key, value)
    }

    /// Insert or overwrite a value
    pub fn dictionary_set(
        &mut self,
        dictionary: DictionaryRef,
        key: &str,
        value: impl Into<TypedValue>,
    ) -> Result<()> {
        self.get_mut(dictionary)?.set(key, value.into())
    }

    /// Copy a value into a pre-created typed value
    ///
    /// `out` must already reference a live typed value (`InvalidOutput`
    /// otherwise). An absent key is `NoData` and leaves `out` untouched.
    pub fn dictionary_get_value(
        &mut self,
        dictionary: DictionaryRef,
        key: &str,
        out: TypedValueRef,
    ) -> Result<()> {
        self.check(dictionary)?;
        if !self.is_alive(out) {
            return Err(LayoutError::InvalidOutput(format!(
                "{} is not a live typed value",
                out
            )));
        }
        let value = self.get(dictionary)?.get(key)?.clone();
        *self.get_mut(out)? = value;
        Ok(())
    }

    pub fn dictionary_get(&self, dictionary: DictionaryRef, key: &str) -> Result<&TypedValue> {
        self.get(dictionary)?.get(key)
    }

    /// Remove a key; `NoData` when absent
    pub fn dictionary_remove_value(
        &mut self,
        dictionary: DictionaryRef,
        key: &str,
    ) -> Result<TypedValue> {
        self.get_mut(dictionary)?.remove(key)
    }

    pub fn dictionary_keys(&self, dictionary: DictionaryRef) -> Result<Vec<String>> {
        Ok(self
            .get(dictionary)?
            .keys()
            .map(str::to_string)
            .collect())
    }

    // ---- typed values ----

    pub fn typed_value(&self, value: TypedValueRef) -> Result<&TypedValue> {
        self.get(value)
    }

    pub fn set_typed_value(
        &mut self,
        value: TypedValueRef,
        new_value: impl Into<TypedValue>,
    ) -> Result<()> {
        *self.get_mut(value)? = new_value.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{AxisAlignedRect2D, RectangleRef};

    fn rect(doc: &mut Document) -> RectangleRef {
        doc.create_rectangle(AxisAlignedRect2D::from_xywh(0.0, 0.0, 1.0, 1.0))
            .unwrap()
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut doc = Document::new();
        let r = rect(&mut doc);
        let created = doc.stats().created;
        let a = doc.attribute_dictionary(r, "meta").unwrap();
        let b = doc.attribute_dictionary(r, "meta").unwrap();
        assert_eq!(a, b);
        assert_eq!(doc.stats().created, created + 1);
        assert_eq!(doc.attribute_dictionary_count(r).unwrap(), 1);
        assert_eq!(doc.get(a).unwrap().owner(), Some(r.handle()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut doc = Document::new();
        let r = rect(&mut doc);
        assert_eq!(
            doc.attribute_dictionary(r, "").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        let unnamed = doc.create_dictionary("");
        assert_eq!(
            doc.add_attribute_dictionary(r, unnamed).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_add_explicit_dictionary() {
        let mut doc = Document::new();
        let r = rect(&mut doc);
        let d = doc.create_dictionary("meta");
        doc.dictionary_set(d, "author", "ann").unwrap();
        doc.add_attribute_dictionary(r, d).unwrap();
        assert_eq!(doc.find_attribute_dictionary(r, "meta").unwrap(), d);

        let clash = doc.create_dictionary("meta");
        assert_eq!(
            doc.add_attribute_dictionary(r, clash).unwrap_err().kind(),
            ErrorKind::Duplicate
        );
        // an attached dictionary cannot move
        let other = rect(&mut doc);
        assert_eq!(
            doc.add_attribute_dictionary(other, d).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_dictionaries_die_with_their_entity() {
        let mut doc = Document::new();
        let mut r = rect(&mut doc);
        let d = doc.attribute_dictionary(r, "meta").unwrap();
        doc.release(&mut r).unwrap();
        assert!(!doc.is_alive(d));
    }

    #[test]
    fn test_get_value() {
        let mut doc = Document::new();
        let r = rect(&mut doc);
        let d = doc.attribute_dictionary(r, "meta").unwrap();
        doc.dictionary_set(d, "count", 3).unwrap();

        let out = doc.create_typed_value();
        doc.dictionary_get_value(d, "count", out).unwrap();
        assert_eq!(doc.typed_value(out).unwrap().get_int32().unwrap(), 3);

        assert_eq!(
            doc.dictionary_get_value(d, "missing", out).unwrap_err().kind(),
            ErrorKind::NoData
        );
        assert_eq!(doc.typed_value(out).unwrap(), &TypedValue::Int32(3));

        let err = doc
            .dictionary_get_value(d, "count", TypedValueRef::invalid())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOutput);
    }

    #[test]
    fn test_set_value_from_container() {
        let mut doc = Document::new();
        let d = doc.create_dictionary("scratch");
        let v = doc.create_typed_value_with("hello");
        doc.dictionary_set_value(d, "greeting", v).unwrap();
        doc.set_typed_value(v, 1.5).unwrap();
        assert_eq!(doc.dictionary_get(d, "greeting").unwrap().get_str().unwrap(), "hello");
        assert_eq!(doc.dictionary_keys(d).unwrap(), vec!["greeting"]);
        doc.dictionary_remove_value(d, "greeting").unwrap();
        assert_eq!(
            doc.dictionary_remove_value(d, "greeting").unwrap_err().kind(),
            ErrorKind::NoData
        );
    }

    #[test]
    fn test_remove_attribute_dictionary() {
        let mut doc = Document::new();
        let r = rect(&mut doc);
        let d = doc.attribute_dictionary(r, "meta").unwrap();
        doc.attribute_dictionary(r, "extra").unwrap();
        doc.remove_attribute_dictionary(r, "meta").unwrap();
        assert!(!doc.is_alive(d));
        assert_eq!(doc.attribute_dictionary_names(r).unwrap(), vec!["extra"]);
        assert_eq!(
            doc.remove_attribute_dictionary(r, "meta").unwrap_err().kind(),
            ErrorKind::NoData
        );
    }

    #[test]
    fn test_dictionary_cannot_host_dictionaries() {
        let mut doc = Document::new();
        let d = doc.create_dictionary("outer");
        assert_eq!(
            doc.attribute_dictionary(d, "inner").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
