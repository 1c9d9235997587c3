//! Symbolic links inside a version tree.
#![cfg(unix)]

use std::os::unix::fs::symlink;
use verso::{ApiTable, BuildError, SymlinkPolicy};

mod common;
use common::{ApiTree, load_relative_name};

fn linked_tree() -> ApiTree {
    let tree = ApiTree::new();
    tree.file("v1/ping.js", "").file("shared/users/create.js", "");
    symlink(tree.root().join("shared/users"), tree.root().join("v1/users")).unwrap();
    symlink(tree.root().join("v1/ping.js"), tree.root().join("v1/pong.js")).unwrap();
    tree
}

#[tokio::test]
async fn test_links_are_skipped_by_default() {
    let tree = linked_tree();

    let table = ApiTable::discover(tree.config(), load_relative_name).await.unwrap();

    let v1 = table.version("v1").unwrap();
    let keys: Vec<_> = v1.keys().map(|key| key.as_str()).collect();
    assert_eq!(keys, ["ping"]);
}

#[tokio::test]
async fn test_links_are_followed() {
    let tree = linked_tree();
    let config = tree.config().with_symlinks(SymlinkPolicy::Follow);

    let table = ApiTable::discover(config, load_relative_name).await.unwrap();

    let v1 = table.version("v1").unwrap();
    let keys: Vec<_> = v1.keys().map(|key| key.as_str()).collect();
    assert_eq!(keys, ["ping", "pong", "users-create"]);
    let out = table.dispatch("v1", "users-create", ()).await.unwrap();
    assert_eq!(out, "users/create");
}

#[tokio::test]
async fn test_links_are_rejected() {
    let tree = linked_tree();
    let config = tree.config().with_symlinks(SymlinkPolicy::Reject);

    let result = ApiTable::discover(config, load_relative_name).await;

    match result {
        Err(BuildError::SymlinkRejected { path }) => assert!(path.ends_with("v1/pong.js")),
        other => panic!("expected a rejected link, got {other:?}"),
    }
}

#[tokio::test]
async fn test_link_cycle_hits_depth_limit() {
    let tree = ApiTree::new();
    tree.dir("v1/loop");
    symlink(tree.root().join("v1"), tree.root().join("v1/loop/again")).unwrap();
    let config = tree
        .config()
        .with_symlinks(SymlinkPolicy::Follow)
        .with_max_depth(8);

    let result = ApiTable::discover(config, load_relative_name).await;

    assert!(matches!(result, Err(BuildError::DepthExceeded { .. })));
}

#[tokio::test]
async fn test_broken_link_is_fatal_when_followed() {
    let tree = ApiTree::new();
    tree.dir("v1");
    symlink(tree.root().join("missing.js"), tree.root().join("v1/dangling.js")).unwrap();

    let skipped = ApiTable::discover(tree.config(), load_relative_name).await;
    assert!(skipped.is_ok());

    let config = tree.config().with_symlinks(SymlinkPolicy::Follow);
    let result = ApiTable::discover(config, load_relative_name).await;
    assert!(matches!(result, Err(BuildError::Io { .. })));
}
