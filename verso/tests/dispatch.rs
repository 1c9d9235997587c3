//! Routing calls through a discovered table.

use std::sync::Arc;
use verso::{
    ApiTable, BuildError, CallError, Catalog, CatalogBuilder, CollisionPolicy, LoadError,
    MethodFile, MethodMapBuilder, Traced, VersoError, boxed, testing::RecordingMethod,
};

mod common;
use common::ApiTree;

type Args = Vec<String>;

fn catalog() -> Catalog<Args, String> {
    CatalogBuilder::new()
        .register("users.create", |_: Args| async { "created".to_string() })
        .register("users/delete", |_: Args| async { "deleted".to_string() })
        .register("echo", |args: Args| async move { args.join(" ") })
        .build()
}

async fn table(tree: &ApiTree) -> ApiTable<Args, String> {
    ApiTable::discover(tree.config(), catalog()).await.unwrap()
}

fn args(values: &[&str]) -> Args {
    values.iter().map(|value| value.to_string()).collect()
}

#[tokio::test]
async fn test_call_named_export() {
    let tree = ApiTree::new();
    tree.file("v1/users/create.ext", "# exported entry point\nusers.create\n");
    let table = table(&tree).await;

    let out = table.call("v1", "users-create", Vec::new()).unwrap().await;

    assert_eq!(out, "created");
}

#[tokio::test]
async fn test_call_whole_module_export() {
    let tree = ApiTree::new();
    tree.file("v1/users/delete.ext", "");
    let table = table(&tree).await;

    let out = table.dispatch("v1", "users-delete", Vec::new()).await.unwrap();

    assert_eq!(out, "deleted");
}

#[tokio::test]
async fn test_arguments_are_forwarded() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = table(&tree).await;

    let out = table.dispatch("v1", "echo", args(&["a", "b", "c"])).await;

    assert_eq!(out, Ok("a b c".to_string()));
}

#[tokio::test]
async fn test_unknown_version() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = table(&tree).await;

    let err = table.call("v2", "anything", Vec::new()).err().unwrap();

    assert!(err.is_version_not_supported());
    assert!(err.to_string().contains("v2"));
    assert_eq!(err.to_string(), "Version v2 is not supported");
}

#[tokio::test]
async fn test_unknown_method() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = table(&tree).await;

    let err = table.call("v1", "ping", Vec::new()).err().unwrap();

    assert!(err.is_method_not_found());
    assert_eq!(err.to_string(), "Method ping is not found in version v1");
}

#[tokio::test]
async fn test_empty_identifiers_miss() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = table(&tree).await;

    let err = table.call("", "echo", Vec::new()).err().unwrap();
    assert_eq!(
        err,
        CallError::VersionNotSupported {
            version: String::new()
        }
    );

    let err = table.call("v1", "", Vec::new()).err().unwrap();
    assert_eq!(
        err,
        CallError::MethodNotFound {
            method: String::new(),
            version: "v1".to_string(),
        }
    );
}

#[tokio::test]
async fn test_versions_are_isolated() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo").file("v2/users/create.ext", "users.create");
    let table = table(&tree).await;

    assert!(table.dispatch("v1", "echo", Vec::new()).await.is_ok());
    let err = table.dispatch("v2", "echo", Vec::new()).await.unwrap_err();
    assert_eq!(
        err,
        CallError::MethodNotFound {
            method: "echo".to_string(),
            version: "v2".to_string(),
        }
    );
}

#[tokio::test]
async fn test_repeated_calls_are_independent() {
    let tree = ApiTree::new();
    tree.file("v1/record.ext", "record");
    let recorder = RecordingMethod::new("ok".to_string());
    let catalog = CatalogBuilder::new().register("record", recorder.clone()).build();
    let table: ApiTable<Args, String> = ApiTable::discover(tree.config(), catalog).await.unwrap();

    let first = table.dispatch("v1", "record", args(&["x"])).await;
    let second = table.dispatch("v1", "record", args(&["x"])).await;

    assert_eq!(first, second);
    assert_eq!(recorder.inputs(), [args(&["x"]), args(&["x"])]);
    assert_eq!(table.method_count(), 1);
}

#[tokio::test]
async fn test_callee_failure_is_returned_unchanged() {
    let tree = ApiTree::new();
    tree.file("v1/divide.ext", "divide");
    let catalog = CatalogBuilder::new()
        .register("divide", |(a, b): (i64, i64)| async move {
            if b == 0 {
                Err("division by zero".to_string())
            } else {
                Ok(a / b)
            }
        })
        .build();
    let table = ApiTable::discover(tree.config(), catalog).await.unwrap();

    assert_eq!(table.dispatch("v1", "divide", (9, 3)).await, Ok(Ok(3)));
    assert_eq!(
        table.dispatch("v1", "divide", (1, 0)).await,
        Ok(Err("division by zero".to_string()))
    );
}

#[tokio::test]
async fn test_unknown_symbol_is_fatal() {
    let tree = ApiTree::new();
    tree.file("v1/users/ban.ext", "users.ban");

    let result = ApiTable::discover(tree.config(), catalog()).await;

    match result {
        Err(BuildError::Load(LoadError::UnknownSymbol { symbol, path })) => {
            assert_eq!(symbol, "users.ban");
            assert!(path.ends_with("v1/users/ban.ext"));
        }
        other => panic!("expected an unknown symbol, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_descriptor_is_fatal() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo twice");

    let result = ApiTable::discover(tree.config(), catalog()).await;

    assert!(matches!(
        result,
        Err(BuildError::Load(LoadError::Malformed { .. }))
    ));
}

#[tokio::test]
async fn test_traced_method() {
    let tree = ApiTree::new();
    tree.file("v1/ping.ext", "ping");
    let catalog = CatalogBuilder::new()
        .register("ping", Traced::new(|_: ()| async { "pong" }, "ping"))
        .build();
    let table = ApiTable::discover(tree.config(), catalog).await.unwrap();

    assert_eq!(table.dispatch("v1", "ping", ()).await, Ok("pong"));
}

#[tokio::test]
async fn test_call_errors_convert_into_verso_error() {
    async fn run(table: &ApiTable<Args, String>) -> Result<String, VersoError> {
        Ok(table.dispatch("v9", "echo", Vec::new()).await?)
    }

    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = table(&tree).await;

    match run(&table).await {
        Err(VersoError::Call(CallError::VersionNotSupported { version })) => {
            assert_eq!(version, "v9");
        }
        other => panic!("expected a call error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_table_is_shared_across_tasks() {
    let tree = ApiTree::new();
    tree.file("v1/echo.ext", "echo");
    let table = Arc::new(table(&tree).await);

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let table = table.clone();
            tokio::spawn(async move {
                table
                    .dispatch("v1", "echo", vec![i.to_string()])
                    .await
                    .unwrap()
            })
        })
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        assert_eq!(task.await.unwrap(), i.to_string());
    }
}

#[tokio::test]
async fn test_table_assembled_without_discovery() {
    let mut v1 = MethodMapBuilder::new("v1", CollisionPolicy::Reject);
    let file = MethodFile::new("v1", "memory/echo", vec!["echo".to_string()]);
    v1.insert(&file, boxed(|args: Args| async move { args.join(",") }))
        .unwrap();
    let table = ApiTable::from_maps([v1.build()]);

    let out = table.dispatch("v1", "echo", args(&["a", "b"])).await;

    assert_eq!(out, Ok("a,b".to_string()));
    assert!(table.call("v2", "echo", Vec::new()).is_err());
}
