//! Request builders
//!
//! One function per mutating or validated operation. Builders are pure: they
//! check their required arguments, then return a [`RequestDescriptor`]
//! without touching the network. A missing argument is reported as
//! [`Error::Validation`] and no descriptor is produced.
//!
//! Optional fields are left out of the body rather than sent as `null`.

use super::descriptor::RequestDescriptor;
use super::endpoint::Endpoint;
use crate::error::{Error, Result};
use reqwest::Method;
use serde_json::{json, Map, Value};

fn require<'a>(value: &'a str, message: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::Validation(message));
    }
    Ok(value)
}

fn require_data<'a>(value: &'a Value, message: &'static str) -> Result<&'a Value> {
    if value.is_null() {
        return Err(Error::Validation(message));
    }
    Ok(value)
}

fn insert_optional(body: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        body.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn named_body(name: &str, description: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), Value::String(name.to_string()));
    insert_optional(&mut body, "description", description);
    Value::Object(body)
}

fn email_body(email_address: &str) -> Value {
    json!({ "emailAddress": email_address })
}

fn request(method: Method, endpoint: Endpoint, params: &[&str]) -> Result<RequestDescriptor> {
    Ok(RequestDescriptor::new(method, endpoint.path(params)?))
}

// =============================================================================
// Authentication
// =============================================================================

pub fn login(email_address: &str, password: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "An email address is required.")?;
    let password = require(password, "A password is required.")?;

    Ok(request(Method::PUT, Endpoint::CurrentAuthentication, &[])?.with_body(json!({
        "emailAddress": email_address,
        "password": password,
    })))
}

pub fn logout() -> Result<RequestDescriptor> {
    request(Method::DELETE, Endpoint::CurrentAuthentication, &[])
}

pub fn delete_authentication(authentication_id: &str) -> Result<RequestDescriptor> {
    let id = require(authentication_id, "An authentication id is required.")?;
    request(Method::DELETE, Endpoint::Authentication, &[id])
}

// =============================================================================
// Users
// =============================================================================

pub fn is_email_available(email_address: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "An email address is required.")?;
    Ok(request(Method::PUT, Endpoint::EmailAvailability, &[])?.with_body(email_body(email_address)))
}

/// Sign-up request. The password is optional; users created without one
/// finish registration through activation.
pub fn create_user(email_address: &str, password: Option<&str>) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "An email address is required.")?;

    let mut body = Map::new();
    body.insert("emailAddress".to_string(), Value::String(email_address.to_string()));
    insert_optional(&mut body, "password", password);

    Ok(request(Method::POST, Endpoint::Users, &[])?.with_body(Value::Object(body)))
}

pub fn request_invitation(email_address: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "An email address is required.")?;
    Ok(request(Method::POST, Endpoint::UserInvitationRequest, &[])?
        .with_body(email_body(email_address)))
}

pub fn activate_user(user_id: &str, activation_code: &str) -> Result<RequestDescriptor> {
    let user_id = require(user_id, "A user id is required.")?;
    let activation_code = require(activation_code, "An activation code is required.")?;

    Ok(request(Method::PUT, Endpoint::UserActivation, &[])?.with_body(json!({
        "userId": user_id,
        "activationCode": activation_code,
    })))
}

pub fn activation_request(email_address: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "An email address is required.")?;
    Ok(request(Method::POST, Endpoint::UserActivationRequest, &[])?
        .with_body(email_body(email_address)))
}

pub fn password_reset_request(email_address: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "A user email is required.")?;
    Ok(request(Method::POST, Endpoint::UserPasswordResetRequest, &[])?
        .with_body(email_body(email_address)))
}

pub fn password_reset(
    user_id: &str,
    password_reset_code: &str,
    password: &str,
) -> Result<RequestDescriptor> {
    let user_id = require(user_id, "A user id is required.")?;
    let code = require(password_reset_code, "A password reset code is required.")?;
    let password = require(password, "A password is required.")?;

    Ok(request(Method::PUT, Endpoint::UserPasswordReset, &[])?.with_body(json!({
        "userId": user_id,
        "passwordResetCode": code,
        "password": password,
    })))
}

pub fn check_registration_status(email_address: &str) -> Result<RequestDescriptor> {
    let email_address = require(email_address, "A user email is required.")?;
    Ok(request(Method::PUT, Endpoint::CheckRegistrationStatus, &[])?
        .with_body(email_body(email_address)))
}

pub fn change_password(new_password: &str) -> Result<RequestDescriptor> {
    let password = require(new_password, "A password is required.")?;
    Ok(request(Method::PUT, Endpoint::UserPassword, &[])?
        .with_body(json!({ "password": password })))
}

pub fn edit_me(data: &Value) -> Result<RequestDescriptor> {
    let data = require_data(data, "User data is required.")?;
    Ok(request(Method::PUT, Endpoint::Me, &[])?.with_body(data.clone()))
}

pub fn add_person_role(role_id: &str) -> Result<RequestDescriptor> {
    let role_id = require(role_id, "A role id is required.")?;
    request(Method::PUT, Endpoint::PersonRole, &[role_id])
}

pub fn remove_person_role(role_id: &str) -> Result<RequestDescriptor> {
    let role_id = require(role_id, "A role id is required.")?;
    request(Method::DELETE, Endpoint::PersonRole, &[role_id])
}

// =============================================================================
// Projects
// =============================================================================

pub fn create_project(name: &str, description: Option<&str>) -> Result<RequestDescriptor> {
    let name = require(name, "A project name is required.")?;
    Ok(request(Method::POST, Endpoint::Projects, &[])?.with_body(named_body(name, description)))
}

pub fn edit_project(
    project_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let name = require(name, "A project name is required.")?;
    Ok(request(Method::PUT, Endpoint::Project, &[project_id])?
        .with_body(named_body(name, description)))
}

pub fn delete_project(project_id: &str) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    request(Method::DELETE, Endpoint::Project, &[project_id])
}

/// Full-text search inside a project. `search_options` keys are sent next
/// to the query; `query` itself cannot be overridden by them.
pub fn search_project(
    project_id: &str,
    search_text: &str,
    search_options: &Map<String, Value>,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let search_text = require(search_text, "A search text is required.")?;

    let mut body = search_options.clone();
    body.insert("query".to_string(), Value::String(search_text.to_string()));

    Ok(request(Method::POST, Endpoint::ProjectSearch, &[project_id])?
        .with_body(Value::Object(body)))
}

pub fn create_project_context(project_id: &str, data: &Value) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let data = require_data(data, "Context data is required.")?;
    Ok(request(Method::POST, Endpoint::ProjectContexts, &[project_id])?.with_body(data.clone()))
}

pub fn edit_project_context(
    project_id: &str,
    context_id: &str,
    data: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let context_id = require(context_id, "A context id is required.")?;
    let data = require_data(data, "Context data is required.")?;
    Ok(request(Method::PUT, Endpoint::ProjectContext, &[project_id, context_id])?
        .with_body(data.clone()))
}

pub fn delete_project_context(project_id: &str, context_id: &str) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let context_id = require(context_id, "A context id is required.")?;
    request(Method::DELETE, Endpoint::ProjectContext, &[project_id, context_id])
}

// =============================================================================
// Instances
// =============================================================================

pub fn create_instance(
    project_id: &str,
    concept_handle: &str,
    properties: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let concept_handle = require(concept_handle, "A concept handle is required.")?;

    Ok(request(Method::POST, Endpoint::Instances, &[project_id])?.with_body(json!({
        "conceptHandle": concept_handle,
        "properties": properties,
    })))
}

/// Apply update operations to an instance. The operations are sent as the
/// PATCH body untouched.
pub fn update_instance(
    project_id: &str,
    instance_id: &str,
    update_operations: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    let operations = require_data(update_operations, "Update operations are required.")?;
    Ok(request(Method::PATCH, Endpoint::Instance, &[project_id, instance_id])?
        .with_body(operations.clone()))
}

pub fn delete_instance(project_id: &str, instance_id: &str) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    request(Method::DELETE, Endpoint::Instance, &[project_id, instance_id])
}

pub fn search_instances(project_id: &str, concept_id: &str) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let concept_id = require(concept_id, "A concept id is required.")?;

    Ok(request(Method::POST, Endpoint::SearchInstances, &[])?.with_body(json!({
        "projectId": project_id,
        "conceptId": concept_id,
    })))
}

pub fn create_instance_cell(
    project_id: &str,
    instance_id: &str,
    data: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    let data = require_data(data, "Cell data is required.")?;
    Ok(request(Method::POST, Endpoint::InstanceCells, &[project_id, instance_id])?
        .with_body(data.clone()))
}

pub fn edit_instance_cell(
    project_id: &str,
    instance_id: &str,
    cell_id: &str,
    data: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    let cell_id = require(cell_id, "A cell id is required.")?;
    let data = require_data(data, "Cell data is required.")?;
    Ok(request(Method::PUT, Endpoint::InstanceCell, &[project_id, instance_id, cell_id])?
        .with_body(data.clone()))
}

pub fn delete_instance_cell(
    project_id: &str,
    instance_id: &str,
    cell_id: &str,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    let cell_id = require(cell_id, "A cell id is required.")?;
    request(Method::DELETE, Endpoint::InstanceCell, &[project_id, instance_id, cell_id])
}

pub fn delete_cell_resource(
    project_id: &str,
    instance_id: &str,
    cell_id: &str,
    resource_id: &str,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let instance_id = require(instance_id, "An instance id is required.")?;
    let cell_id = require(cell_id, "A cell id is required.")?;
    let resource_id = require(resource_id, "A resource id is required.")?;
    request(
        Method::DELETE,
        Endpoint::CellResource,
        &[project_id, instance_id, cell_id, resource_id],
    )
}

// =============================================================================
// Exhibitions
// =============================================================================

pub fn create_exhibition(project_id: &str, data: &Value) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let data = require_data(data, "Exhibition data is required.")?;
    Ok(request(Method::POST, Endpoint::Exhibitions, &[project_id])?.with_body(data.clone()))
}

pub fn edit_exhibition(
    project_id: &str,
    exhibition_id: &str,
    data: &Value,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let exhibition_id = require(exhibition_id, "An exhibition id is required.")?;
    let data = require_data(data, "Exhibition data is required.")?;
    Ok(request(Method::PUT, Endpoint::Exhibition, &[project_id, exhibition_id])?
        .with_body(data.clone()))
}

pub fn delete_exhibition(project_id: &str, exhibition_id: &str) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let exhibition_id = require(exhibition_id, "An exhibition id is required.")?;
    request(Method::DELETE, Endpoint::Exhibition, &[project_id, exhibition_id])
}

pub fn delete_exhibition_capture(
    project_id: &str,
    exhibition_id: &str,
    capture_id: &str,
) -> Result<RequestDescriptor> {
    let project_id = require(project_id, "A project id is required.")?;
    let exhibition_id = require(exhibition_id, "An exhibition id is required.")?;
    let capture_id = require(capture_id, "A capture id is required.")?;
    request(
        Method::DELETE,
        Endpoint::ExhibitionCapture,
        &[project_id, exhibition_id, capture_id],
    )
}

// =============================================================================
// Organizations & teams
// =============================================================================

pub fn create_organization(name: &str, description: Option<&str>) -> Result<RequestDescriptor> {
    let name = require(name, "An organization name is required.")?;
    Ok(request(Method::POST, Endpoint::Organizations, &[])?
        .with_body(named_body(name, description)))
}

pub fn edit_organization(
    organization_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let name = require(name, "An organization name is required.")?;
    Ok(request(Method::PUT, Endpoint::Organization, &[organization_id])?
        .with_body(named_body(name, description)))
}

pub fn delete_organization(organization_id: &str) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    request(Method::DELETE, Endpoint::Organization, &[organization_id])
}

fn team_body(
    name: &str,
    description: Option<&str>,
    is_owner_team: Option<bool>,
    visibility: Option<&str>,
) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), Value::String(name.to_string()));
    insert_optional(&mut body, "description", description);
    if let Some(is_owner_team) = is_owner_team {
        body.insert("isOwnerTeam".to_string(), Value::Bool(is_owner_team));
    }
    insert_optional(&mut body, "visibility", visibility);
    Value::Object(body)
}

pub fn create_team(
    organization_id: &str,
    name: &str,
    description: Option<&str>,
    is_owner_team: bool,
    visibility: Option<&str>,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let name = require(name, "A team name is required.")?;
    Ok(request(Method::POST, Endpoint::Teams, &[organization_id])?
        .with_body(team_body(name, description, Some(is_owner_team), visibility)))
}

pub fn edit_team(
    organization_id: &str,
    team_id: &str,
    name: &str,
    description: Option<&str>,
    visibility: Option<&str>,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    let name = require(name, "A team name is required.")?;
    Ok(request(Method::PUT, Endpoint::Team, &[organization_id, team_id])?
        .with_body(team_body(name, description, None, visibility)))
}

pub fn delete_team(organization_id: &str, team_id: &str) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    request(Method::DELETE, Endpoint::Team, &[organization_id, team_id])
}

pub fn add_team_member(
    organization_id: &str,
    team_id: &str,
    user_id: &str,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    let user_id = require(user_id, "A user id is required.")?;
    Ok(request(Method::POST, Endpoint::TeamMembers, &[organization_id, team_id])?
        .with_body(json!({ "userId": user_id })))
}

pub fn remove_team_member(
    organization_id: &str,
    team_id: &str,
    member_id: &str,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    let member_id = require(member_id, "A member id is required.")?;
    request(Method::DELETE, Endpoint::TeamMember, &[organization_id, team_id, member_id])
}

pub fn create_organization_project(
    organization_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let name = require(name, "A project name is required.")?;
    Ok(request(Method::POST, Endpoint::OrganizationProjects, &[organization_id])?
        .with_body(named_body(name, description)))
}

pub fn edit_organization_project(
    organization_id: &str,
    project_id: &str,
    name: &str,
    description: Option<&str>,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let project_id = require(project_id, "A project id is required.")?;
    let name = require(name, "A project name is required.")?;
    Ok(request(Method::PUT, Endpoint::OrganizationProject, &[organization_id, project_id])?
        .with_body(named_body(name, description)))
}

pub fn delete_organization_project(
    organization_id: &str,
    project_id: &str,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let project_id = require(project_id, "A project id is required.")?;
    request(Method::DELETE, Endpoint::OrganizationProject, &[organization_id, project_id])
}

fn require_permissions(permissions: &[&str]) -> Result<Value> {
    if permissions.iter().all(|p| p.trim().is_empty()) {
        return Err(Error::Validation("At least one permission is required."));
    }
    Ok(Value::Array(
        permissions
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| Value::String((*p).to_string()))
            .collect(),
    ))
}

pub fn add_project_team(
    organization_id: &str,
    project_id: &str,
    team_id: &str,
    permissions: &[&str],
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let project_id = require(project_id, "A project id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    let permissions = require_permissions(permissions)?;
    Ok(request(
        Method::POST,
        Endpoint::OrganizationProjectTeams,
        &[organization_id, project_id],
    )?
    .with_body(json!({ "teamId": team_id, "permissions": permissions })))
}

pub fn edit_project_team(
    organization_id: &str,
    project_id: &str,
    team_id: &str,
    permissions: &[&str],
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let project_id = require(project_id, "A project id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    let permissions = require_permissions(permissions)?;
    Ok(request(
        Method::PUT,
        Endpoint::OrganizationProjectTeam,
        &[organization_id, project_id, team_id],
    )?
    .with_body(json!({ "permissions": permissions })))
}

pub fn delete_project_team(
    organization_id: &str,
    project_id: &str,
    team_id: &str,
) -> Result<RequestDescriptor> {
    let organization_id = require(organization_id, "An organization id is required.")?;
    let project_id = require(project_id, "A project id is required.")?;
    let team_id = require(team_id, "A team id is required.")?;
    request(
        Method::DELETE,
        Endpoint::OrganizationProjectTeam,
        &[organization_id, project_id, team_id],
    )
}

// =============================================================================
// Concepts
// =============================================================================

pub fn update_concept(concept_id: &str, data: &Value) -> Result<RequestDescriptor> {
    let concept_id = require(concept_id, "A concept id is required.")?;
    let data = require_data(data, "Concept data is required.")?;
    Ok(request(Method::PUT, Endpoint::Concept, &[concept_id])?.with_body(data.clone()))
}

pub fn update_concept_category(concept_id: &str, data: &Value) -> Result<RequestDescriptor> {
    let concept_id = require(concept_id, "A concept id is required.")?;
    let data = require_data(data, "A concept category is required.")?;
    Ok(request(Method::PUT, Endpoint::ConceptCategory, &[concept_id])?.with_body(data.clone()))
}

pub fn update_concept_form(concept_id: &str, form: &Value) -> Result<RequestDescriptor> {
    let concept_id = require(concept_id, "A concept id is required.")?;
    let form = require_data(form, "A concept form is required.")?;
    Ok(request(Method::PUT, Endpoint::ConceptForm, &[concept_id])?
        .with_body(json!({ "form": form })))
}

pub fn create_relation_specification(
    concept_id: &str,
    handle: &str,
    relation_type: &str,
) -> Result<RequestDescriptor> {
    let concept_id = require(concept_id, "A concept id is required.")?;
    let handle = require(handle, "A relation handle is required.")?;
    let relation_type = require(relation_type, "A relation type is required.")?;
    Ok(request(Method::POST, Endpoint::ConceptSpecifications, &[concept_id])?.with_body(json!({
        "handle": handle,
        "relationType": relation_type,
    })))
}

// =============================================================================
// Values
// =============================================================================

pub fn create_value_cell(value_id: &str, position: &Value) -> Result<RequestDescriptor> {
    let value_id = require(value_id, "A value id is required.")?;
    let position = require_data(position, "A cell position is required.")?;
    Ok(request(Method::POST, Endpoint::ValueCells, &[value_id])?
        .with_body(json!({ "position": position })))
}

pub fn edit_value_cell(
    value_id: &str,
    cell_id: &str,
    position: &Value,
) -> Result<RequestDescriptor> {
    let value_id = require(value_id, "A value id is required.")?;
    let cell_id = require(cell_id, "A cell id is required.")?;
    let position = require_data(position, "A cell position is required.")?;
    Ok(request(Method::PUT, Endpoint::ValueCell, &[value_id, cell_id])?
        .with_body(json!({ "position": position })))
}

pub fn delete_value_cell(value_id: &str, cell_id: &str) -> Result<RequestDescriptor> {
    let value_id = require(value_id, "A value id is required.")?;
    let cell_id = require(cell_id, "A cell id is required.")?;
    request(Method::DELETE, Endpoint::ValueCell, &[value_id, cell_id])
}

// =============================================================================
// Attributes
// =============================================================================

pub fn create_attribute(data: &Value) -> Result<RequestDescriptor> {
    let data = require_data(data, "Attribute data is required.")?;
    Ok(request(Method::POST, Endpoint::Attributes, &[])?.with_body(data.clone()))
}

pub fn edit_attribute(attribute_id: &str, data: &Value) -> Result<RequestDescriptor> {
    let attribute_id = require(attribute_id, "An attribute id is required.")?;
    let data = require_data(data, "Attribute data is required.")?;
    Ok(request(Method::PUT, Endpoint::Attribute, &[attribute_id])?.with_body(data.clone()))
}

pub fn delete_attribute(attribute_id: &str) -> Result<RequestDescriptor> {
    let attribute_id = require(attribute_id, "An attribute id is required.")?;
    request(Method::DELETE, Endpoint::Attribute, &[attribute_id])
}
