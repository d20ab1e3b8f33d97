//! Outbound adapters implementing the domain's driven ports.
//!
//! Only PostgreSQL persistence lives here. Adapters translate between domain
//! types and storage rows and hold no business rules.

pub mod persistence;
