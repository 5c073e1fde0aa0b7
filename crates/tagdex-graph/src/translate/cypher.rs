//! Cypher generation from requested selections.
//!
//! Every root query compiles into one statement whose RETURN clause is a
//! map projection covering exactly the requested fields. Relationships
//! become pattern comprehensions, so related nodes are fetched in the
//! same round trip, nested to any depth the selection asks for.

use super::model::{Entity, FieldKind};
use super::{Page, Selection, TranslateError};

/// Compile the `hashtag` root query.
pub fn hashtag_query(selection: &Selection, page: &Page) -> Result<String, TranslateError> {
    let projection = project("hashtag", Entity::Hashtag, selection)?;
    let mut cypher = format!("MATCH (hashtag:Hashtag {{tag: $tag}})\nRETURN {projection} AS value");
    push_page(&mut cypher, page);
    Ok(cypher)
}

/// Compile the `tweetsByText` root query against the tweet_text index.
pub fn tweets_by_text_query(selection: &Selection, page: &Page) -> Result<String, TranslateError> {
    let projection = project("tweet", Entity::Tweet, selection)?;
    let mut cypher = format!(
        "CALL db.index.fulltext.queryNodes('tweet_text', $search)\nYIELD node AS tweet\nRETURN {projection} AS value"
    );
    push_page(&mut cypher, page);
    Ok(cypher)
}

fn push_page(cypher: &mut String, page: &Page) {
    if page.offset.is_some() {
        cypher.push_str("\nSKIP $offset");
    }
    if page.first.is_some() {
        cypher.push_str("\nLIMIT $first");
    }
}

/// Build a map projection for `var` covering exactly the requested fields.
fn project(var: &str, entity: Entity, selection: &Selection) -> Result<String, TranslateError> {
    if selection.is_empty() {
        return Err(TranslateError::EmptySelection {
            entity: entity.name(),
        });
    }

    let mut entries = Vec::with_capacity(selection.fields.len());
    for field in &selection.fields {
        let kind = entity
            .field(&field.name)
            .ok_or_else(|| TranslateError::UnknownField {
                entity: entity.name(),
                field: field.name.clone(),
            })?;

        match kind {
            FieldKind::Property(property) if property == field.name => {
                entries.push(format!(".{property}"));
            }
            FieldKind::Property(property) => {
                entries.push(format!("{}: {var}.{property}", field.name));
            }
            FieldKind::Relation(relation) => {
                let child_var = format!("{var}_{}", lowercase(&field.name));
                let pattern = relation
                    .pattern
                    .replace("{src}", var)
                    .replace("{tgt}", &child_var);
                let child = project(&child_var, relation.target, &field.children)?;
                let comprehension = format!("[{pattern} | {child}]");
                if relation.single {
                    entries.push(format!("{}: head({comprehension})", field.name));
                } else {
                    entries.push(format!("{}: {comprehension}", field.name));
                }
            }
        }
    }

    Ok(format!("{var} {{{}}}", entries.join(", ")))
}

/// Lowercase a camelCase wire name for use in a Cypher variable.
fn lowercase(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
