//! Pull-driven pagination over token-continued list endpoints.
//!
//! List operations on the API return one page at a time plus an opaque
//! continuation token. This module exposes that contract two ways,
//! sharing a single page-fetch primitive:
//!
//! - **single call** — invoke the fetch once and get a [`Page`] back
//!   (items, continuation query, raw payload);
//! - **lazy stream** — [`into_stream`] re-invokes the fetch with each
//!   page's continuation query until exhausted, yielding items one by
//!   one.
//!
//! The stream is strictly pull-driven: at most one page request is in
//! flight, and the next page is requested only once the current page's
//! items have been consumed. Dropping the stream stops the traversal;
//! no further requests are issued.

use std::collections::VecDeque;

use futures::{Future, Stream, stream};
use serde_json::Value;

use crate::error::Result;

/// One page of a list operation.
///
/// # Type Parameters
///
/// * `Q` — the query type; `next_query` is the caller's query with the
///   server's continuation token merged in.
/// * `T` — the item type.
#[derive(Debug, Clone)]
pub struct Page<Q, T> {
    /// Items of this page, in server order. Empty when the page is
    /// empty; never an error.
    pub items: Vec<T>,
    /// Query for the following page. `Some` iff the server indicated
    /// more results exist; `None` is terminal.
    pub next_query: Option<Q>,
    /// The unparsed server payload, kept for observability.
    pub raw: Value,
}

struct Traversal<Q, T, F> {
    fetch: F,
    next_query: Option<Q>,
    buffered: VecDeque<T>,
}

/// Adapt a page-fetch operation into a lazy stream of its items.
///
/// `fetch` is invoked with `query` for the first page, then with each
/// page's `next_query` until a page reports `None`. Items are yielded
/// in server order within a page, pages in continuation order.
///
/// An error from any page ends the stream with that error; none of the
/// failing page's items are emitted. Every call to `into_stream` is an
/// independent traversal starting from `query`; two streams over the
/// same operation share no state.
pub fn into_stream<Q, T, F, Fut>(query: Q, fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Q) -> Fut,
    Fut: Future<Output = Result<Page<Q, T>>>,
{
    stream::try_unfold(
        Traversal {
            fetch,
            next_query: Some(query),
            buffered: VecDeque::new(),
        },
        |mut state| async move {
            loop {
                if let Some(item) = state.buffered.pop_front() {
                    return Ok(Some((item, state)));
                }
                // 缓冲耗尽才请求下一页，保证同一时刻最多一个在途请求
                let Some(query) = state.next_query.take() else {
                    return Ok(None);
                };
                let page = (state.fetch)(query).await?;
                state.buffered = page.items.into();
                state.next_query = page.next_query;
            }
        },
    )
}
