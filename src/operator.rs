//! Operator-precedence table builder: compiles a priority/associativity
//! specification plus a base atom parser into one combinator.
//!
//! Entries are grouped by `(priority, assoc)`, the groups sorted descending
//! by priority (ties broken by first-registration order), and a `current`
//! parser is folded outward one precedence layer at a time.

use std::sync::Arc;

use crate::branch::choice;
use crate::input::Sequence;
use crate::repeat::{many, BinOp};
use crate::sequence::zip;
use crate::Parser;

/// Priority assigned to an entry when the caller doesn't care to pick one.
pub const DEFAULT_PRIORITY: i32 = 7;

/// Associativity of one operator-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    None,
    Prefix,
    Postfix,
}

type UnOp<'a, B> = Arc<dyn Fn(B) -> B + Send + Sync + 'a>;

struct Group<'a, S: ?Sized + Sequence, B> {
    priority: i32,
    assoc_index: usize,
    assoc: Assoc,
    binary_ops: Vec<Parser<'a, S, BinOp<'a, B>>>,
    unary_ops: Vec<Parser<'a, S, UnOp<'a, B>>>,
}

/**
 * Scoped builder for an operator-precedence table. Construct with
 * [`operator_table`], register entries with [`left`](Self::left),
 * [`right`](Self::right), [`none`](Self::none), [`prefix`](Self::prefix),
 * [`postfix`](Self::postfix), then call [`build`](Self::build).
 *
 * Construction is side-effect-free beyond populating the table; the final
 * parser is only produced at [`build`](Self::build).
 */
pub struct OperatorTable<'a, S: ?Sized + Sequence + 'a, B: 'a> {
    base: Parser<'a, S, B>,
    groups: Vec<Group<'a, S, B>>,
}

impl<'a, S, B> OperatorTable<'a, S, B>
where
    S: ?Sized + Sequence + 'a,
    B: 'a,
{
    pub fn new(base: Parser<'a, S, B>) -> Self {
        OperatorTable {
            base,
            groups: Vec::new(),
        }
    }

    fn group_index(&mut self, priority: i32, assoc: Assoc) -> usize {
        if let Some(i) = self
            .groups
            .iter()
            .position(|g| g.priority == priority && g.assoc == assoc)
        {
            i
        } else {
            let assoc_index = self.groups.len();
            self.groups.push(Group {
                priority,
                assoc_index,
                assoc,
                binary_ops: Vec::new(),
                unary_ops: Vec::new(),
            });
            self.groups.len() - 1
        }
    }

    /// Registers a left-associative binary operator: `a op b op c` folds as `(a op b) op c`.
    pub fn left<K>(
        mut self,
        op: Parser<'a, S, K>,
        priority: i32,
        mapping: impl Fn(B, K, B) -> B + Send + Sync + 'a,
    ) -> Self
    where
        K: Clone + 'a,
    {
        let idx = self.group_index(priority, Assoc::Left);
        self.groups[idx].binary_ops.push(wrap_binary(op, mapping));
        self
    }

    /// Registers a right-associative binary operator: `a op b op c` folds as `a op (b op c)`.
    pub fn right<K>(
        mut self,
        op: Parser<'a, S, K>,
        priority: i32,
        mapping: impl Fn(B, K, B) -> B + Send + Sync + 'a,
    ) -> Self
    where
        K: Clone + 'a,
    {
        let idx = self.group_index(priority, Assoc::Right);
        self.groups[idx].binary_ops.push(wrap_binary(op, mapping));
        self
    }

    /// Registers a non-associative binary operator: at most one occurrence, `a op b` but not `a op b op c`.
    pub fn none<K>(
        mut self,
        op: Parser<'a, S, K>,
        priority: i32,
        mapping: impl Fn(B, K, B) -> B + Send + Sync + 'a,
    ) -> Self
    where
        K: Clone + 'a,
    {
        let idx = self.group_index(priority, Assoc::None);
        self.groups[idx].binary_ops.push(wrap_binary(op, mapping));
        self
    }

    /// Registers a prefix unary operator, e.g. `-x`.
    pub fn prefix<K>(
        mut self,
        op: Parser<'a, S, K>,
        priority: i32,
        mapping: impl Fn(B, K) -> B + Send + Sync + 'a,
    ) -> Self
    where
        K: Clone + 'a,
    {
        let idx = self.group_index(priority, Assoc::Prefix);
        self.groups[idx].unary_ops.push(wrap_unary(op, mapping));
        self
    }

    /// Registers a postfix unary operator, e.g. `x!`.
    pub fn postfix<K>(
        mut self,
        op: Parser<'a, S, K>,
        priority: i32,
        mapping: impl Fn(B, K) -> B + Send + Sync + 'a,
    ) -> Self
    where
        K: Clone + 'a,
    {
        let idx = self.group_index(priority, Assoc::Postfix);
        self.groups[idx].unary_ops.push(wrap_unary(op, mapping));
        self
    }

    /**
     * Compiles the table into a single parser. Groups are sorted by
     * **descending** priority (binds tighter = innermost layer first),
     * ties broken by the order the `(priority, assoc)` pair was first
     * registered. An empty table returns the base parser verbatim.
     */
    pub fn build(self) -> Parser<'a, S, B> {
        let mut groups = self.groups;
        groups.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.assoc_index.cmp(&b.assoc_index))
        });

        let mut current = self.base;
        for group in groups {
            current = match group.assoc {
                Assoc::Left => {
                    let op = choice(group.binary_ops);
                    let tail = many(zip(op, current.clone(), |f, b| (f, b)));
                    zip(current, tail, |first, rest: Vec<(BinOp<'a, B>, B)>| {
                        rest.into_iter().fold(first, |acc, (f, b)| f(acc, b))
                    })
                }
                Assoc::Right => {
                    let op = choice(group.binary_ops);
                    let head = many(zip(current.clone(), op, |b, f| (b, f)));
                    zip(head, current, |rest: Vec<(B, BinOp<'a, B>)>, last| {
                        let mut acc = last;
                        for (b, f) in rest.into_iter().rev() {
                            acc = f(b, acc);
                        }
                        acc
                    })
                }
                Assoc::None => {
                    let op = choice(group.binary_ops);
                    let maybe = zip(op, current.clone(), |f, r| (f, r)).or_not();
                    zip(current, maybe, |l, maybe: Option<(BinOp<'a, B>, B)>| {
                        match maybe {
                            Some((f, r)) => f(l, r),
                            None => l,
                        }
                    })
                }
                Assoc::Prefix => {
                    let op = choice(group.unary_ops);
                    zip(many(op), current, |ops: Vec<UnOp<'a, B>>, inner| {
                        ops.into_iter().rev().fold(inner, |acc, f| f(acc))
                    })
                }
                Assoc::Postfix => {
                    let op = choice(group.unary_ops);
                    zip(current, many(op), |inner, ops: Vec<UnOp<'a, B>>| {
                        ops.into_iter().fold(inner, |acc, f| f(acc))
                    })
                }
            };
        }
        current
    }
}

fn wrap_binary<'a, S, K, B>(
    op: Parser<'a, S, K>,
    mapping: impl Fn(B, K, B) -> B + Send + Sync + 'a,
) -> Parser<'a, S, BinOp<'a, B>>
where
    S: ?Sized + Sequence + 'a,
    K: Clone + 'a,
    B: 'a,
{
    let mapping = Arc::new(mapping);
    op.map(move |k: K| {
        let mapping = mapping.clone();
        Arc::new(move |l: B, r: B| mapping(l, k.clone(), r)) as BinOp<'a, B>
    })
}

fn wrap_unary<'a, S, K, B>(
    op: Parser<'a, S, K>,
    mapping: impl Fn(B, K) -> B + Send + Sync + 'a,
) -> Parser<'a, S, UnOp<'a, B>>
where
    S: ?Sized + Sequence + 'a,
    K: Clone + 'a,
    B: 'a,
{
    let mapping = Arc::new(mapping);
    op.map(move |k: K| {
        let mapping = mapping.clone();
        Arc::new(move |x: B| mapping(x, k.clone())) as UnOp<'a, B>
    })
}

/// Entry point: begins a table over `base`. See [`OperatorTable`].
pub fn operator_table<'a, S, B>(base: Parser<'a, S, B>) -> OperatorTable<'a, S, B>
where
    S: ?Sized + Sequence + 'a,
    B: 'a,
{
    OperatorTable::new(base)
}
