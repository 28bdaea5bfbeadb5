//! Resource accessor graph
//!
//! Accessors are cheap, immutable handles naming one position in the API's
//! resource tree. Collection accessors list and create; item accessors get,
//! edit and remove; both expose drill-down factories returning the next
//! level down. Factories never perform I/O.
//!
//! Each accessor keeps a clone of its [`Tenant`] and owned copies of the ids
//! on its path, so paths are a pure function of those ids.
//!
//! ```ignore
//! use business_elements::Client;
//!
//! async fn example() -> business_elements::Result<()> {
//!     let client = Client::new("https://api.example.com")?;
//!     let tenant = client.tenant("example.com");
//!     tenant.login("me@example.com", "secret").await?;
//!     let instance = tenant.projects().project("P1").instances().instance("I1");
//!     let body = instance.get().await?;
//!     Ok(())
//! }
//! ```

mod applications;
mod attributes;
mod cells;
mod concepts;
mod contexts;
mod exhibitions;
mod instances;
mod organizations;
mod projects;
mod teams;
mod tenant;
mod users;
mod values;

pub use applications::{Application, ApplicationForm, ApplicationForms, Applications};
pub use attributes::{Attribute, Attributes};
pub use cells::{Cell, CellResource, CellResources, Cells};
pub use concepts::{Concept, Concepts};
pub use contexts::{ProjectContext, ProjectContexts};
pub use exhibitions::{Capture, Captures, Exhibition, Exhibitions};
pub use instances::{Instance, Instances};
pub use organizations::{
    Organization, OrganizationProject, OrganizationProjects, Organizations, ProjectTeam,
    ProjectTeams,
};
pub use projects::{Project, Projects};
pub use teams::{Team, TeamMember, TeamMembers, Teams};
pub use tenant::Tenant;
pub use users::{Me, Users};
pub use values::{ValueAccessor, ValueCell, ValueCells};
