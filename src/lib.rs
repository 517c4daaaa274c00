//! chain-hashmap: a string-keyed hash map with separate chaining and
//! prime-stepped resizing, plus the small s-expression tooling that uses
//! it as a symbol table.
//!
//! Internal Design:
//!
//! Summary
//! - Core: `ChainHashMap<V>` — an array of bucket chains whose length
//!   steps through a fixed prime sequence (53, 101, 211, ...). A
//!   polynomial rolling hash is taken mod the live bucket count, so a
//!   resize recomputes every entry's bucket from scratch.
//! - Load factor: grow one step when more than half full (checked after
//!   insert), shrink one step when less than a quarter full (checked
//!   after removal). Both steps clamp silently at the ends of the size
//!   table; clamping is never an error.
//! - Entries are stored in a slotmap arena and linked by arena key, so
//!   the map owns every node, chains are singly linked, and teardown is
//!   flat (no recursive chain walk on drop).
//! - Values are nullable: an entry can be present while holding no value.
//!   `get` reports both "absent" and "present with no value" as `None`;
//!   `contains_key` tells them apart.
//!
//! Companions (built on the same crate, not part of the core table):
//! - `input`: byte pull-source over a string slice or any reader.
//! - `scanner`: three-state tokenizer producing parens, symbols, and
//!   integers.
//! - `expr`: recursive-descent parse and eval of prefix `+`/`-` forms,
//!   resolving symbols through a `ChainHashMap<i64>`.
//!
//! Constraints
//! - Single-threaded: no internal locking; callers needing shared access
//!   wrap the whole map in their own synchronization.
//! - Keys are strings only; values are opaque to the table.
//! - No iteration order guarantees; a resize reorders chains.
//! - Key misses are absence (`None`/`false`), never errors.

mod chain_hash_map;
pub mod expr;
pub mod input;
pub mod scanner;
mod size_table;

// Public surface
pub use chain_hash_map::{ChainHashMap, Iter};
pub use expr::{eval, parse, Ast, EvalError};
pub use input::Input;
pub use scanner::{scan, scan_str, ScanError, Token};
