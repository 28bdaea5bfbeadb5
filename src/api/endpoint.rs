//! Endpoint Resolver
//!
//! Every server endpoint is a variant of [`Endpoint`], declared once in the
//! table below together with its symbolic name and path template. Path
//! parameters are written as `{name}` placeholders and substituted verbatim,
//! in order, by [`Endpoint::path`].

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

macro_rules! endpoints {
    ($( $variant:ident => $name:literal, $template:literal; )*) => {
        /// Closed set of server endpoints.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $( $variant, )*
        }

        impl Endpoint {
            /// Every registered endpoint, in declaration order.
            pub const ALL: &'static [Endpoint] = &[ $( Endpoint::$variant, )* ];

            /// Symbolic name, as used in the API documentation.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $name, )*
                }
            }

            /// Path template with `{param}` placeholders.
            pub const fn template(self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $template, )*
                }
            }
        }
    };
}

endpoints! {
    Root                        => "root",                        "/";

    // Authentication
    Authentications             => "authentications",             "/authentications";
    Authentication              => "authentication",              "/authentications/{id}";
    CurrentAuthentication       => "currentAuthentication",       "/authentications/current";

    // Tenant
    CurrentTenant               => "currentTenant",               "/tenants/current";

    // Users
    Users                       => "users",                       "/users";
    User                        => "user",                        "/users/{id}";
    Me                          => "me",                          "/users/me";
    UserPassword                => "userPassword",                "/users/me/password";
    Person                      => "person",                      "/users/me/person";
    PersonRole                  => "personRole",                  "/users/me/person/roles/{roleId}";
    Roles                       => "roles",                       "/roles";
    UserPasswordResetRequest    => "userPasswordResetRequest",    "/users/password_reset_request";
    UserPasswordReset           => "userPasswordReset",           "/users/password_reset";
    UserEmailAddressRequest     => "userEmailAddressRequest",     "/users/email_address_request";
    UserActivation              => "userActivation",              "/users/activation";
    UserActivationRequest       => "userActivationRequest",       "/users/activation_request";
    UserInvitationRequest       => "userInvitationRequest",       "/users/invitation_request";
    EmailAvailability           => "emailAvailability",           "/users/email_availability";
    CheckRegistrationStatus     => "checkRegistrationStatus",     "/users/registration_check";

    // Attributes
    Attributes                  => "attributes",                  "/attributes";
    Attribute                   => "attribute",                   "/attributes/{attributeId}";

    // Projects
    Projects                    => "projects",                    "/projects";
    Project                     => "project",                     "/projects/{projectId}";
    ProjectSearch               => "projectSearch",               "/projects/{projectId}/search";
    ProjectContexts             => "projectContexts",             "/projects/{projectId}/contexts";
    ProjectContext              => "projectContext",              "/projects/{projectId}/contexts/{contextId}";
    ProjectContextEvents        => "projectContextEvents",        "/projects/{projectId}/contexts/{contextId}/events";

    // Instances
    Instances                   => "instances",                   "/projects/{projectId}/instances";
    Instance                    => "instance",                    "/projects/{projectId}/instances/{instanceId}";
    InstanceCells               => "instanceCells",               "/projects/{projectId}/instances/{instanceId}/cells";
    InstanceCell                => "instanceCell",                "/projects/{projectId}/instances/{instanceId}/cells/{cellId}";
    CellResources               => "cellResources",               "/projects/{projectId}/instances/{instanceId}/cells/{cellId}/resources";
    CellResource                => "cellResource",                "/projects/{projectId}/instances/{instanceId}/cells/{cellId}/resources/{resourceId}";
    SearchInstances             => "searchInstances",             "/search/instances";

    // Exhibitions
    Exhibitions                 => "exhibitions",                 "/projects/{projectId}/exhibitions";
    Exhibition                  => "exhibition",                  "/projects/{projectId}/exhibitions/{exhibitionId}";
    ExhibitionCaptures          => "exhibitionCaptures",          "/projects/{projectId}/exhibitions/{exhibitionId}/captures";
    ExhibitionCapture           => "exhibitionCapture",           "/projects/{projectId}/exhibitions/{exhibitionId}/captures/{captureId}";

    // Organizations
    Organizations               => "organizations",               "/organizations";
    Organization                => "organization",                "/organizations/{orgId}";
    Teams                       => "teams",                       "/organizations/{orgId}/teams";
    Team                        => "team",                        "/organizations/{orgId}/teams/{teamId}";
    TeamMembers                 => "teamMembers",                 "/organizations/{orgId}/teams/{teamId}/members";
    TeamMember                  => "teamMember",                  "/organizations/{orgId}/teams/{teamId}/members/{memberId}";
    OrganizationProjects        => "organizationProjects",        "/organizations/{orgId}/projects";
    OrganizationProject         => "organizationProject",         "/organizations/{orgId}/projects/{projectId}";
    OrganizationProjectTeams    => "organizationProjectTeams",    "/organizations/{orgId}/projects/{projectId}/teams";
    OrganizationProjectTeam     => "organizationProjectTeam",     "/organizations/{orgId}/projects/{projectId}/teams/{teamId}";

    // Applications
    Applications                => "applications",                "/applications";
    Application                 => "application",                 "/applications/{handle}";
    ApplicationForms            => "applicationForms",            "/applications/{handle}/forms";
    ApplicationForm             => "applicationForm",             "/applications/{handle}/forms/{formHandle}";
    ApplicationConfig           => "applicationConfig",           "/applications/{handle}/configs/{configHandle}";
    ApplicationLocalization     => "applicationLocalization",     "/applications/{handle}/localizations/{localizationHandle}";

    // Concepts
    Concepts                    => "concepts",                    "/concepts";
    Concept                     => "concept",                     "/concepts/{conceptId}";
    ConceptCategory             => "conceptCategory",             "/concepts/{conceptId}/category";
    ConceptForm                 => "conceptForm",                 "/concepts/{conceptId}/form";
    ConceptSpecifications       => "conceptSpecifications",       "/concepts/{conceptId}/specifications";

    // Values
    Value                       => "value",                       "/values/{valueId}";
    ValueCells                  => "valueCells",                  "/values/{valueId}/cells";
    ValueCell                   => "valueCell",                   "/values/{valueId}/cells/{cellId}";
}

impl Endpoint {
    /// Number of path parameters the template expects.
    pub fn arity(self) -> usize {
        self.template().matches('{').count()
    }

    /// Resolve the endpoint to a concrete path.
    ///
    /// Parameters are inserted verbatim in template order. Passing the wrong
    /// number of parameters is a programming error and yields
    /// [`Error::Configuration`].
    pub fn path(self, params: &[&str]) -> Result<String> {
        let arity = self.arity();
        if params.len() != arity {
            return Err(Error::Configuration(format!(
                "endpoint '{}' expects {} parameter(s), got {}",
                self.name(),
                arity,
                params.len()
            )));
        }

        let template = self.template();
        let capacity = template.len() + params.iter().map(|p| p.len()).sum::<usize>();
        let mut path = String::with_capacity(capacity);
        let mut params = params.iter();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let close = rest[open..]
                .find('}')
                .map(|offset| open + offset + 1)
                .unwrap_or(rest.len());
            if let Some(param) = params.next() {
                path.push_str(param);
            }
            rest = &rest[close..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.name() == name)
            .ok_or_else(|| Error::Configuration(format!("unknown endpoint '{}'", name)))
    }
}
