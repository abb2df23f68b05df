use std::sync::{Mutex, MutexGuard, PoisonError};

use faultseg_core::FaultId;

/// The single source of truth for which faults are active right now.
///
/// The registry is safe under one concurrent writer (the ingestion path) and
/// one concurrent reader (the render loop), and generalizes to many of
/// either. Both operations work on defensive copies: the internal list is
/// replaced wholesale and read out wholesale, so a reader always observes one
/// complete update and never a mix of two. The exclusive lock is scoped to
/// the copy alone and is never held across rendering or sleeping.
///
/// Neither operation has an error surface; both always succeed.
///
/// # Examples
///
/// ```
/// use faultseg::core::parse_fault_list;
/// use faultseg::FaultRegistry;
///
/// let registry = FaultRegistry::new();
/// assert!(registry.snapshot().is_empty());
///
/// registry.replace(&parse_fault_list("lidar_fail, gps_fail"));
/// assert_eq!(2, registry.snapshot().len());
///
/// // An empty update means "no faults".
/// registry.replace(&[]);
/// assert!(registry.snapshot().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct FaultRegistry {
    faults: Mutex<Vec<FaultId>>,
}

impl FaultRegistry {
    /// Creates a new `FaultRegistry` with no active faults.
    pub fn new() -> Self {
        FaultRegistry::default()
    }

    /// Atomically overwrites the active list with a copy of `faults`.
    ///
    /// An empty slice is valid and means "no faults". Order and duplicates
    /// are kept exactly as given; the last call wins. Snapshots already
    /// taken are unaffected, and later changes to the caller's list don't
    /// reach the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg::{FaultId, FaultRegistry};
    ///
    /// let registry = FaultRegistry::new();
    /// let mut faults = vec![FaultId::new("imu_fail")];
    /// registry.replace(&faults);
    ///
    /// faults.clear();
    /// assert_eq!(1, registry.snapshot().len());
    /// ```
    pub fn replace(&self, faults: &[FaultId]) {
        let copy = faults.to_vec();
        *self.lock() = copy;
    }

    /// Returns a copy of the active list.
    ///
    /// The copy is complete with respect to a single [`replace`] call
    /// (concurrent writers can never leave elements of two updates mixed
    /// together), and the call blocks no longer than a concurrent writer's
    /// copy.
    ///
    /// [`replace`]: Self::replace
    pub fn snapshot(&self) -> Vec<FaultId> {
        self.lock().clone()
    }

    /// A panicked writer can't leave a torn list (the swap is a single
    /// assignment), so a poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Vec<FaultId>> {
        self.faults.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
