//! Integration Tests for the Hydrate/Dehydrate Engine
//!
//! These tests exercise the full blog-post scenario: a three-level nested
//! schema (Post -> Comment -> Author) hydrated from one JSON document and
//! dehydrated back.

use std::sync::Arc;

use serde_json::{json, Value};

use kodata_core::{
    from_json_value, to_json_value, Kind, ModelDescriptor, ModelInstance, PropertyMetadata,
};

struct Schema {
    user: Arc<ModelDescriptor>,
    comment: Arc<ModelDescriptor>,
    post: Arc<ModelDescriptor>,
}

fn schema() -> Schema {
    let user = ModelDescriptor::builder("User")
        .property("name", PropertyMetadata::one(Kind::Text))
        .build();

    let comment = ModelDescriptor::builder("Comment")
        .property("author", PropertyMetadata::one(Kind::Model(user.clone())))
        .property("body", PropertyMetadata::one(Kind::Text))
        .build();

    let post = ModelDescriptor::builder("Post")
        .property("author", PropertyMetadata::one(Kind::Model(user.clone())))
        .property("body", PropertyMetadata::one(Kind::Text))
        .property("comments", PropertyMetadata::many(Kind::Model(comment.clone())))
        .property("likes", PropertyMetadata::one(Kind::Number))
        .property("public", PropertyMetadata::one(Kind::Boolean))
        .build();

    Schema {
        user,
        comment,
        post,
    }
}

fn post_data() -> Value {
    json!({
        "author": { "name": "Gareth" },
        "body": "Hello, world!",
        "comments": [
            {
                "author": { "name": "Alison" },
                "body": "Hooray!"
            },
            {
                "author": { "name": "Norma Dan" },
                "body": "Welcome to Dollywood!"
            }
        ],
        "likes": 11,
        "public": false
    })
}

/// Hydration wires every level of the schema into reactive cells.
#[test]
fn hydration_applies_transform_correctly() {
    let schema = schema();
    let post = from_json_value(&schema.post, &post_data()).unwrap();

    assert!(post.is_instance_of(&schema.post));

    let author = post.model("author").unwrap();
    assert!(author.is_instance_of(&schema.user));
    assert_eq!(author.scalar("name").unwrap().get(), Some(json!("Gareth")));

    assert_eq!(
        post.scalar("body").unwrap().get(),
        Some(json!("Hello, world!"))
    );
    assert_eq!(post.scalar("likes").unwrap().get(), Some(json!(11)));
    assert_eq!(post.scalar("public").unwrap().get(), Some(json!(false)));

    let comments = post.sequence("comments").unwrap();
    assert_eq!(comments.len(), 2);

    let first = comments.get(0).unwrap();
    let first = first.as_instance().unwrap();
    assert!(first.is_instance_of(&schema.comment));
    assert_eq!(
        first.model("author").unwrap().scalar("name").unwrap().get(),
        Some(json!("Alison"))
    );
    assert_eq!(
        first.scalar("body").unwrap().get(),
        Some(json!("Hooray!"))
    );

    let second = comments.get(1).unwrap();
    let second = second.as_instance().unwrap();
    assert_eq!(
        second.model("author").unwrap().scalar("name").unwrap().get(),
        Some(json!("Norma Dan"))
    );
    assert_eq!(
        second.scalar("body").unwrap().get(),
        Some(json!("Welcome to Dollywood!"))
    );
}

/// The round trip reproduces the input exactly.
#[test]
fn round_trip_deep_equals_input() {
    let schema = schema();
    let data = post_data();

    let post = from_json_value(&schema.post, &data).unwrap();
    let out = to_json_value(&schema.post, &post).unwrap();

    assert_eq!(out, data);
}

/// Hydration leaves its input untouched.
#[test]
fn hydration_does_not_modify_input_data() {
    let schema = schema();
    let data = post_data();
    let before = data.clone();

    let post = from_json_value(&schema.post, &data).unwrap();

    // Mutate the hydrated instance aggressively.
    post.scalar("body").unwrap().set(json!("rewritten"));
    post.model("author")
        .unwrap()
        .scalar("name")
        .unwrap()
        .set(json!("Nobody"));

    assert_eq!(data, before);
}

/// Dehydration reads but never writes the instance.
#[test]
fn dehydration_does_not_modify_instance() {
    let schema = schema();
    let post = from_json_value(&schema.post, &post_data()).unwrap();

    let first = to_json_value(&schema.post, &post).unwrap();
    let second = to_json_value(&schema.post, &post).unwrap();

    assert_eq!(first, second);
    assert_eq!(post.sequence("comments").unwrap().len(), 2);
}

/// Deep navigation across three schema levels reads the right leaf.
#[test]
fn three_level_navigation() {
    let schema = schema();
    let post = from_json_value(&schema.post, &post_data()).unwrap();

    let name = post
        .sequence("comments")
        .unwrap()
        .get(1)
        .unwrap()
        .as_instance()
        .unwrap()
        .model("author")
        .unwrap()
        .scalar("name")
        .unwrap()
        .get();

    assert_eq!(name, Some(json!("Norma Dan")));
}

/// Arity mismatches are rejected on the way in.
#[test]
fn hydration_rejects_arity_mismatch() {
    let schema = schema();

    let mut data = post_data();
    data["comments"] = json!("not a list");
    let err = from_json_value(&schema.post, &data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property `comments` of model `Post`: expected multiple but got not array"
    );

    let mut data = post_data();
    data["likes"] = json!([11]);
    let err = from_json_value(&schema.post, &data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property `likes` of model `Post`: expected one but got array"
    );
}

/// Arity mismatches are rejected on the way out too.
#[test]
fn dehydration_rejects_arity_mismatch() {
    let schema = schema();
    let post = from_json_value(&schema.post, &post_data()).unwrap();

    // Move the comments slot into a single-valued property by hand.
    let mut broken = ModelInstance::new(schema.post.clone());
    let comments = post.get("comments").unwrap().clone();
    broken.set("likes", comments);

    let err = to_json_value(&schema.post, &broken).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property `likes` of model `Post`: expected one but got array"
    );
}

/// Edits made through cells show up in the next dehydration.
#[test]
fn edits_flow_through_the_round_trip() {
    let schema = schema();
    let post = from_json_value(&schema.post, &post_data()).unwrap();

    post.scalar("likes").unwrap().set(json!(12));
    post.sequence("comments")
        .unwrap()
        .get(0)
        .unwrap()
        .as_instance()
        .unwrap()
        .scalar("body")
        .unwrap()
        .set(json!("Hooray again!"));

    let out = to_json_value(&schema.post, &post).unwrap();
    assert_eq!(out["likes"], json!(12));
    assert_eq!(out["comments"][0]["body"], json!("Hooray again!"));
    // Untouched leaves survive unchanged.
    assert_eq!(out["comments"][1]["body"], json!("Welcome to Dollywood!"));
}

/// Each hydration call produces an independent instance.
#[test]
fn hydrations_do_not_share_state() {
    let schema = schema();
    let data = post_data();

    let a = from_json_value(&schema.post, &data).unwrap();
    let b = from_json_value(&schema.post, &data).unwrap();

    a.scalar("body").unwrap().set(json!("changed in a"));

    assert_eq!(
        b.scalar("body").unwrap().get(),
        Some(json!("Hello, world!"))
    );
}
