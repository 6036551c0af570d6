//! The flatten-and-register traversal.
//!
//! [`bind_all`] performs an iterative depth-first traversal of a
//! configuration value, computes a dot-delimited registration key for every
//! reachable node (root included), and emits one constant binding per node
//! into the supplied registry. Classification, leaf determination, and
//! exclusion filtering are delegated to the sibling modules.

use log::debug;

use crate::classify::{classify, is_leaf};
use crate::error::Result;
use crate::path::{bind_key, resolve};
use crate::settings::{is_excluded, BinderSettings};
use crate::value::Value;

/// The registry boundary: an external container that accepts constant
/// bindings.
///
/// The binder only ever writes; it never reads values back, never unbinds,
/// and never rebinds on its own. When the classifier legitimately emits a
/// duplicate property name, the same key is registered again with the same
/// value, so implementations should treat a repeated key as a plain
/// overwrite.
#[cfg_attr(test, mockall::automock)]
pub trait Registry {
    /// Associates a flattened key with a snapshot value.
    fn bind_constant(&mut self, key: &str, value: Value);
}

/// Flattens `root` and registers every reachable, non-excluded node.
///
/// Each node is registered under `prefix` plus its dot-joined path; the root
/// is registered under exactly the prefix. The value bound for a node is the
/// snapshot observed at traversal time. Instance nodes are bound by handle;
/// their fields are bound by value.
///
/// Children are discovered only after their parent has been registered, but
/// sibling subtrees complete in LIFO order, so no ordering beyond "parent
/// before its own children" should be assumed.
///
/// When `settings.debug` is set, one trace line per registration is emitted
/// at debug level in the form `Binding "<dot-path>" to "<key>"`.
///
/// # Errors
///
/// Propagates pattern and path-resolution failures unrecovered; the
/// traversal has no validation layer. Cyclic object graphs are outside the
/// contract and will not terminate.
///
/// # Examples
///
/// ```
/// use flatkey::{bind_all, BinderSettings, Container, Value};
///
/// let root = Value::from(serde_json::json!({"settings": {"a": 1}}));
/// let mut container = Container::new();
/// bind_all(&mut container, &root, &BinderSettings::default()).unwrap();
///
/// assert_eq!(container.constant("CFG.settings.a"), Some(&Value::from(1)));
/// ```
pub fn bind_all<R: Registry + ?Sized>(
    registry: &mut R,
    root: &Value,
    settings: &BinderSettings,
) -> Result<()> {
    let prefix = settings.effective_prefix();
    let patterns = settings.patterns();

    // Iterative DFS. The stack holds property paths still to visit; each
    // path is the segment sequence from the root, with the root itself
    // represented by a single empty segment.
    let mut stack: Vec<Vec<String>> = vec![vec![String::new()]];

    while let Some(segments) = stack.pop() {
        let object_path = segments.join(".");
        let key = bind_key(prefix, &segments);

        let value = resolve(root, &segments)?;

        if settings.debug_enabled() {
            debug!("Binding \"{object_path}\" to \"{key}\"");
        }
        registry.bind_constant(&key, value.clone());

        if !is_leaf(&value) {
            for member in classify(&value) {
                if is_excluded(&member, patterns) {
                    continue;
                }
                let mut child = segments.clone();
                child.push(member);
                stack.push(child);
            }
        }
    }

    Ok(())
}
