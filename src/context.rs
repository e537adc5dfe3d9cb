//! Scoped logging context for consumers of generated message sets.
//!
//! Broker code pushes a context describing the acting entity (a connection,
//! a channel, a subscription) before handing off to code that emits log
//! messages; nested code reads the innermost context without threading it
//! through every call. The stack is thread-local and LIFO.
//!
//! Entering a scope hands back a guard that pops on drop, so a scope cannot
//! leak across an early return and the stack cannot underflow through this
//! API. Reading the context with no scope active is a programming error and
//! panics rather than losing the log line's attribution.

use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<LogContext>> = const { RefCell::new(Vec::new()) };
}

/// Context describing who is acting when a message is logged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogContext {
    subject: String,
}

impl LogContext {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// Display subject prepended to emitted log lines, e.g.
    /// `con:1(guest@127.0.0.1/prod)`.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Enter a context scope; the returned guard pops it when dropped.
#[must_use = "dropping the guard immediately exits the context scope"]
pub fn enter(context: LogContext) -> ContextGuard {
    CONTEXT_STACK.with(|stack| stack.borrow_mut().push(context));
    ContextGuard {
        _not_send: PhantomData,
    }
}

/// The innermost context on this thread.
///
/// # Panics
/// Panics when no scope is active on this thread. Logging without
/// attribution would be a silent bug; failing here surfaces the missing
/// [`enter`] at the offending call site.
pub fn current() -> LogContext {
    CONTEXT_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| panic!("no logging context entered on this thread"))
    })
}

/// Pops its context on drop. Not `Send`: a scope stays on the thread that
/// entered it.
pub struct ContextGuard {
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CONTEXT_STACK.with(|stack| {
            stack
                .borrow_mut()
                .pop()
                .expect("context stack underflow: guard outlived its stack");
        });
    }
}
