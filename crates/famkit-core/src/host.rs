//! Contract the family operations need from the authoring host.
//!
//! The host owns the document, its family manager and its transaction
//! machinery. The operations only talk to it through these traits, so any
//! host binding (or [`crate::memory::MemoryFamily`]) can drive them.

use famkit_model::{
    ElementId, ElementParameter, FamilyParameter, FamilyType, HostError, ParameterRequest,
    ParameterValue,
};

/// The currently open document.
pub trait FamilyDocument {
    fn title(&self) -> &str;

    /// True when the document is open in the Family Editor. Mutations are
    /// only attempted on family documents.
    fn is_family_document(&self) -> bool;
}

/// Family manager operations.
pub trait ParameterStore {
    /// Looks up a family parameter; absence is `None`, never an error.
    fn family_parameter(&self, name: &str) -> Option<FamilyParameter>;

    /// All family parameters in host order.
    fn family_parameters(&self) -> Vec<FamilyParameter>;

    fn add_parameter(&mut self, request: &ParameterRequest) -> Result<FamilyParameter, HostError>;

    /// Instance parameters of a placed element followed by the parameters
    /// of its type.
    fn element_parameters(&self, element: &ElementId) -> Result<Vec<ElementParameter>, HostError>;

    /// Drives an element (or element type) parameter by a family parameter.
    fn associate(
        &mut self,
        element: &ElementId,
        element_parameter: &ElementParameter,
        family_parameter: &FamilyParameter,
    ) -> Result<(), HostError>;

    fn set_element_parameter(
        &mut self,
        element: &ElementId,
        name: &str,
        value: ParameterValue,
    ) -> Result<(), HostError>;

    /// Adds a named type to the family's type table.
    fn new_type(&mut self, name: &str) -> Result<FamilyType, HostError>;
}

/// Host transaction primitives. Use [`crate::transaction::Transaction`]
/// rather than calling these directly.
pub trait TransactionHost {
    fn start_transaction(&mut self, name: &str) -> Result<(), HostError>;
    fn commit_transaction(&mut self) -> Result<(), HostError>;
    fn rollback_transaction(&mut self) -> Result<(), HostError>;
}

/// Everything an operation needs.
pub trait FamilyHost: FamilyDocument + ParameterStore + TransactionHost {}

impl<T> FamilyHost for T where T: FamilyDocument + ParameterStore + TransactionHost + ?Sized {}
