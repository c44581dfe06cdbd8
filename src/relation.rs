use crate::error::{Result, StoreError};
use crate::store::Record;

/// A belongs-to relationship: get or set the related record.
///
/// The related type is a static parameter, so polymorphic relationships
/// (related type unknown until runtime) cannot be wrapped — matching the
/// rule that id accessors are only generated when the related type is known.
pub trait Relation {
    type Related;

    fn related(&self) -> Option<&Self::Related>;

    fn set_related(&mut self, related: Option<Self::Related>);
}

/// Look up a record by its generated-id field value.
pub trait RidLookup {
    type Record;

    /// The record whose `field` equals `value`, if one exists.
    fn find_by_field(&self, field: &str, value: &str) -> std::result::Result<Option<Self::Record>, StoreError>;
}

/// Wraps a [`Relation`] with accessors that speak generated ids instead of
/// internal keys: read the related record's id, or re-point the relation by
/// looking a record up by id.
#[derive(Debug)]
pub struct RidRelation<REL> {
    relation: REL,
    field: String,
}

impl<REL: Relation> RidRelation<REL> {
    pub fn new(relation: REL, field: impl Into<String>) -> Self {
        Self {
            relation,
            field: field.into(),
        }
    }

    pub const fn relation(&self) -> &REL {
        &self.relation
    }

    pub fn into_inner(self) -> REL {
        self.relation
    }

    pub fn related(&self) -> Option<&REL::Related> {
        self.relation.related()
    }

    pub fn set_related(&mut self, related: Option<REL::Related>) {
        self.relation.set_related(related);
    }
}

impl<REL> RidRelation<REL>
where
    REL: Relation,
    REL::Related: Record,
{
    /// The related record's generated id, or `None` if the relation is unset
    /// or the related record has no id yet.
    pub fn rid(&self) -> Option<String> {
        self.relation
            .related()
            .and_then(|related| related.field(&self.field))
            .filter(|v| !v.is_empty())
    }
}

impl<REL> RidRelation<REL>
where
    REL: Relation,
    REL::Related: Record + Clone,
{
    /// Point the relation at the record whose generated id is `value`.
    ///
    /// A miss is not an error: the relation is left unset and `Ok(None)` is
    /// returned. The found record is returned on a hit.
    ///
    /// # Errors
    ///
    /// Only if the lookup itself fails in the storage layer.
    pub fn set_by_rid<L>(&mut self, lookup: &L, value: &str) -> Result<Option<REL::Related>>
    where
        L: RidLookup<Record = REL::Related>,
    {
        let found = lookup.find_by_field(&self.field, value)?;
        self.relation.set_related(found.clone());
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Author {
        name: String,
        rid: Option<String>,
    }

    impl Record for Author {
        fn field(&self, name: &str) -> Option<String> {
            (name == "rid").then(|| self.rid.clone()).flatten()
        }

        fn set_field(&mut self, name: &str, value: &str) {
            if name == "rid" {
                self.rid = Some(value.to_string());
            }
        }
    }

    /// The belongs-to side: a post's author.
    #[derive(Debug, Default)]
    struct AuthorRelation {
        author: Option<Author>,
    }

    impl Relation for AuthorRelation {
        type Related = Author;

        fn related(&self) -> Option<&Author> {
            self.author.as_ref()
        }

        fn set_related(&mut self, related: Option<Author>) {
            self.author = related;
        }
    }

    struct AuthorTable {
        by_rid: HashMap<String, Author>,
    }

    impl AuthorTable {
        fn new(authors: &[Author]) -> Self {
            let by_rid = authors
                .iter()
                .filter_map(|a| a.rid.clone().map(|rid| (rid, a.clone())))
                .collect();
            Self { by_rid }
        }
    }

    impl RidLookup for AuthorTable {
        type Record = Author;

        fn find_by_field(
            &self,
            field: &str,
            value: &str,
        ) -> std::result::Result<Option<Author>, StoreError> {
            assert_eq!(field, "rid");
            Ok(self.by_rid.get(value).cloned())
        }
    }

    fn ada() -> Author {
        Author {
            name: "ada".to_string(),
            rid: Some("abc12".to_string()),
        }
    }

    #[test]
    fn test_rid_reads_related_records_id() {
        let mut relation = RidRelation::new(AuthorRelation::default(), "rid");
        assert_eq!(relation.rid(), None);

        relation.set_related(Some(ada()));
        assert_eq!(relation.rid(), Some("abc12".to_string()));
    }

    #[test]
    fn test_rid_none_when_related_has_no_id() {
        let author = Author {
            name: "ada".to_string(),
            rid: None,
        };
        let mut relation = RidRelation::new(AuthorRelation::default(), "rid");
        relation.set_related(Some(author));
        assert_eq!(relation.rid(), None);
    }

    #[test]
    fn test_set_by_rid_wires_relation_and_returns_record() {
        let table = AuthorTable::new(&[ada()]);
        let mut relation = RidRelation::new(AuthorRelation::default(), "rid");

        let found = relation.set_by_rid(&table, "abc12").expect("lookup");
        assert_eq!(found, Some(ada()));
        assert_eq!(relation.related(), Some(&ada()));
        assert_eq!(relation.rid(), Some("abc12".to_string()));
    }

    #[test]
    fn test_set_by_rid_miss_unsets_relation() {
        let table = AuthorTable::new(&[ada()]);
        let mut relation = RidRelation::new(AuthorRelation::default(), "rid");
        relation.set_related(Some(ada()));

        let found = relation.set_by_rid(&table, "zzzzz").expect("lookup");
        assert_eq!(found, None);
        assert_eq!(relation.related(), None);
        assert_eq!(relation.rid(), None);
    }

    #[test]
    fn test_set_by_rid_custom_field() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Comment {
            random_id: String,
        }

        impl Record for Comment {
            fn field(&self, name: &str) -> Option<String> {
                (name == "random_id").then(|| self.random_id.clone())
            }

            fn set_field(&mut self, name: &str, value: &str) {
                if name == "random_id" {
                    self.random_id = value.to_string();
                }
            }
        }

        #[derive(Debug, Default)]
        struct CommentRelation {
            comment: Option<Comment>,
        }

        impl Relation for CommentRelation {
            type Related = Comment;

            fn related(&self) -> Option<&Comment> {
                self.comment.as_ref()
            }

            fn set_related(&mut self, related: Option<Comment>) {
                self.comment = related;
            }
        }

        struct CommentTable(Vec<Comment>);

        impl RidLookup for CommentTable {
            type Record = Comment;

            fn find_by_field(
                &self,
                field: &str,
                value: &str,
            ) -> std::result::Result<Option<Comment>, StoreError> {
                Ok(self
                    .0
                    .iter()
                    .find(|c| c.field(field).is_some_and(|v| v == value))
                    .cloned())
            }
        }

        let table = CommentTable(vec![Comment {
            random_id: "0123456789".to_string(),
        }]);
        let mut relation = RidRelation::new(CommentRelation::default(), "random_id");
        let found = relation.set_by_rid(&table, "0123456789").expect("lookup");
        assert!(found.is_some());
        assert_eq!(relation.rid(), Some("0123456789".to_string()));
    }

    #[test]
    fn test_set_by_rid_propagates_lookup_error() {
        struct BrokenTable;

        impl RidLookup for BrokenTable {
            type Record = Author;

            fn find_by_field(
                &self,
                _field: &str,
                _value: &str,
            ) -> std::result::Result<Option<Author>, StoreError> {
                Err("db gone".into())
            }
        }

        let mut relation = RidRelation::new(AuthorRelation::default(), "rid");
        assert!(relation.set_by_rid(&BrokenTable, "abc12").is_err());
    }
}
