//! Growable contiguous sequence storage with an explicit growth policy.
//!
//! [`GrowVec<T>`] owns a contiguous, reallocatable backing store together
//! with its length and capacity, so a single handle suffices for append,
//! indexed access, and release. Appends are amortized O(1): when the store
//! is full its capacity doubles (with a floor of
//! [`GrowVec::MIN_CAPACITY`]), so the total copy cost of N appends from
//! empty is O(N).
//!
//! Growth is fallible. Allocation failure surfaces as
//! [`GrowVecError::OutOfMemory`] and leaves the container observably
//! unchanged — no partial growth, no partial write.
//!
//! # Safety model
//!
//! No `unsafe`. The live prefix is exposed only through bounds-checked
//! slice views, and any operation that may reallocate takes `&mut self`,
//! so references into the old store cannot outlive a reallocating append.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::GrowVecError;
pub use vec::GrowVec;
