//! Length predicates for string columns.
//!
//! Built explicitly at each call site and composed into a query with
//! `QueryFilter::filter`; no lookup registration or other process-wide
//! state is involved.

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};

/// `char_length(col) >= min`
pub fn char_length_gte<C>(col: C, min: u32) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::char_length(Expr::col(col))).gte(min)
}

/// `char_length(col) < max`
pub fn char_length_lt<C>(col: C, max: u32) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::char_length(Expr::col(col))).lt(max)
}
