//! Subcommands, one per endpoint operation

use std::path::PathBuf;

use anyhow::Context;
use api_client::ApiClient;
use clap::{Args, Subcommand};
use domain::{
    BulkStatusUpdate, ContactQuery, ContactStatus, ContactSubmission, ContactUpdate,
    ContentSection, LoginCredentials, PortfolioProject, PortfolioQuery, PricingPlan,
    ProfileUpdate, ProjectStatus, RegisterRequest, ReorderItem, UserQuery, UserRole, UserUpdate,
    validate_payload,
};
use serde_json::{Value, json};

use crate::payload::{read_json, read_upload, read_validated};

/// Paging shared by list commands
#[derive(Debug, Clone, Copy, Args)]
pub struct Paging {
    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,
}

/// `/auth` operations
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Create an account from a JSON file (name, email, password, confirmPassword)
    Register {
        /// Registration payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Log in and store the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "TRIVESHA_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show the logged-in user's profile
    Me,

    /// Update the logged-in user's name or email
    UpdateProfile {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,
    },
}

/// `/pricing` operations
#[derive(Debug, Subcommand)]
pub enum PricingCommand {
    /// List active plans as shown on the pricing page
    List,

    /// List every plan, including deleted ones
    ListAll,

    /// Show one plan
    Get {
        /// Plan id
        id: String,
    },

    /// Create a plan from a JSON file
    Create {
        /// Plan payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace a plan from a JSON file
    Update {
        /// Plan id
        id: String,

        /// Plan payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Soft-delete a plan
    Delete {
        /// Plan id
        id: String,
    },

    /// Restore a soft-deleted plan
    Restore {
        /// Plan id
        id: String,
    },

    /// Delete a plan for good
    Purge {
        /// Plan id
        id: String,
    },

    /// Flip the "popular" highlight
    TogglePopular {
        /// Plan id
        id: String,
    },

    /// Set display order; ids are given first to last
    Reorder {
        /// Plan ids in their new order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// `/admin` operations
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List users
    Users {
        /// Filter by role (user, admin)
        #[arg(long)]
        role: Option<UserRole>,

        /// Search by name or email
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        paging: Paging,
    },

    /// Show one user
    User {
        /// User id
        id: String,
    },

    /// Change a user's name, role or active flag
    UpdateUser {
        /// User id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New role (user, admin)
        #[arg(long)]
        role: Option<UserRole>,

        /// Enable or disable the account
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a user
    DeleteUser {
        /// User id
        id: String,
    },

    /// Dashboard statistics
    Stats,
}

/// Portfolio listing filters
#[derive(Debug, Clone, Args)]
pub struct PortfolioFilter {
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by status (draft, published, archived)
    #[arg(long)]
    pub status: Option<ProjectStatus>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    #[command(flatten)]
    pub paging: Paging,
}

impl From<PortfolioFilter> for PortfolioQuery {
    fn from(filter: PortfolioFilter) -> Self {
        Self {
            category: filter.category,
            status: filter.status,
            search: filter.search,
            page: filter.paging.page,
            limit: filter.paging.limit,
        }
    }
}

/// `/portfolio` operations
#[derive(Debug, Subcommand)]
pub enum PortfolioCommand {
    /// List published projects
    List {
        #[command(flatten)]
        filter: PortfolioFilter,
    },

    /// Show one project by id
    Get {
        /// Project id
        id: String,
    },

    /// Show one project by slug
    Slug {
        /// Project slug
        slug: String,
    },

    /// List featured projects
    Featured,

    /// List project categories
    Categories,

    /// List every project regardless of status
    ListAll {
        #[command(flatten)]
        filter: PortfolioFilter,
    },

    /// Create a project from a JSON file
    Create {
        /// Project payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace a project from a JSON file
    Update {
        /// Project id
        id: String,

        /// Project payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },

    /// Set the status of several projects at once
    BulkStatus {
        /// New status (draft, published, archived)
        #[arg(long)]
        status: ProjectStatus,

        /// Project ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Set display order; ids are given first to last
    Reorder {
        /// Project ids in their new order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// `/content` operations
#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// List all sections
    List,

    /// Show one section
    Get {
        /// Section key, e.g. "hero"
        section: String,
    },

    /// Show the field layout of a section
    Schema {
        /// Section key
        section: String,
    },

    /// Create a section from a JSON file
    Create {
        /// Section payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace a section from a JSON file
    Update {
        /// Section key
        section: String,

        /// Section payload
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete a section
    Delete {
        /// Section key
        section: String,
    },
}

/// `/upload` operations
#[derive(Debug, Subcommand)]
pub enum UploadCommand {
    /// Upload one image
    Image {
        /// Image file
        path: PathBuf,
    },

    /// Upload several images in one request
    Images {
        /// Image files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Delete an uploaded image
    Delete {
        /// Stored file name
        filename: String,
    },

    /// List uploaded images
    List,
}

/// `/contact` operations
#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Send the public contact form
    Submit {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Company
        #[arg(long)]
        company: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Kind of project, e.g. "Web Development"
        #[arg(long)]
        project_type: Option<String>,

        /// Budget range
        #[arg(long)]
        budget: Option<String>,

        /// Desired timeline
        #[arg(long)]
        timeline: Option<String>,
    },

    /// List inbox entries
    List {
        /// Filter by status (new, read, replied, archived)
        #[arg(long)]
        status: Option<ContactStatus>,

        /// Search name, email and message
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        paging: Paging,
    },

    /// Show one entry
    Get {
        /// Entry id
        id: String,
    },

    /// Change status or notes of an entry
    Update {
        /// Entry id
        id: String,

        /// New status (new, read, replied, archived)
        #[arg(long)]
        status: Option<ContactStatus>,

        /// Internal notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Inbox counters
    Stats,
}

impl AuthCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let auth = api.auth();
        match self {
            Self::Register { file } => {
                let request: RegisterRequest = read_json(&file)?;
                Ok(auth.sign_up(&request).await?)
            },
            Self::Login { email, password } => {
                auth.sign_in(&LoginCredentials::new(email, password))
                    .await
                    .context("Login failed")?;
                Ok(json!({ "loggedIn": true, "user": api.session().user() }))
            },
            Self::Logout => {
                auth.sign_out().await?;
                Ok(json!({ "loggedIn": false }))
            },
            Self::Me => Ok(auth.get_profile().await?),
            Self::UpdateProfile { name, email } => {
                let update = ProfileUpdate { name, email };
                validate_payload(&update)?;
                Ok(auth.update_profile(&update).await?)
            },
        }
    }
}

impl PricingCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let pricing = api.pricing();
        let value = match self {
            Self::List => pricing.get_plans().await?,
            Self::ListAll => pricing.get_all_plans().await?,
            Self::Get { id } => pricing.get_plan(&id).await?,
            Self::Create { file } => {
                let plan: PricingPlan = read_validated(&file)?;
                pricing.create_plan(&plan).await?
            },
            Self::Update { id, file } => {
                let plan: PricingPlan = read_validated(&file)?;
                pricing.update_plan(&id, &plan).await?
            },
            Self::Delete { id } => pricing.delete_plan(&id).await?,
            Self::Restore { id } => pricing.restore_plan(&id).await?,
            Self::Purge { id } => pricing.permanently_delete_plan(&id).await?,
            Self::TogglePopular { id } => pricing.toggle_popular(&id).await?,
            Self::Reorder { ids } => pricing.reorder_plans(&ReorderItem::sequence(&ids)).await?,
        };
        Ok(value)
    }
}

impl AdminCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let admin = api.admin();
        let value = match self {
            Self::Users {
                role,
                search,
                paging,
            } => {
                let query = UserQuery {
                    role,
                    search,
                    page: paging.page,
                    limit: paging.limit,
                };
                admin.get_users(&query).await?
            },
            Self::User { id } => admin.get_user(&id).await?,
            Self::UpdateUser {
                id,
                name,
                role,
                active,
            } => {
                let update = UserUpdate {
                    name,
                    role,
                    is_active: active,
                };
                admin.update_user(&id, &update).await?
            },
            Self::DeleteUser { id } => admin.delete_user(&id).await?,
            Self::Stats => admin.get_stats().await?,
        };
        Ok(value)
    }
}

impl PortfolioCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let portfolio = api.portfolio();
        let value = match self {
            Self::List { filter } => portfolio.get_projects(&filter.into()).await?,
            Self::Get { id } => portfolio.get_project(&id).await?,
            Self::Slug { slug } => portfolio.get_by_slug(&slug).await?,
            Self::Featured => portfolio.get_featured().await?,
            Self::Categories => portfolio.get_categories().await?,
            Self::ListAll { filter } => portfolio.get_all_projects(&filter.into()).await?,
            Self::Create { file } => {
                let project: PortfolioProject = read_validated(&file)?;
                portfolio.create_project(&project).await?
            },
            Self::Update { id, file } => {
                let project: PortfolioProject = read_validated(&file)?;
                portfolio.update_project(&id, &project).await?
            },
            Self::Delete { id } => portfolio.delete_project(&id).await?,
            Self::BulkStatus { status, ids } => {
                portfolio
                    .bulk_update_status(&BulkStatusUpdate::new(ids, status))
                    .await?
            },
            Self::Reorder { ids } => {
                portfolio
                    .reorder_projects(&ReorderItem::sequence(&ids))
                    .await?
            },
        };
        Ok(value)
    }
}

impl ContentCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let content = api.content();
        let value = match self {
            Self::List => content.get_sections().await?,
            Self::Get { section } => content.get_section(&section).await?,
            Self::Schema { section } => content.get_schema(&section).await?,
            Self::Create { file } => {
                let section: ContentSection = read_validated(&file)?;
                content.create_section(&section).await?
            },
            Self::Update { section: key, file } => {
                let section: ContentSection = read_validated(&file)?;
                content.update_section(&key, &section).await?
            },
            Self::Delete { section } => content.delete_section(&section).await?,
        };
        Ok(value)
    }
}

impl UploadCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let upload = api.upload();
        let value = match self {
            Self::Image { path } => upload.upload_image(read_upload(&path).await?).await?,
            Self::Images { paths } => {
                let mut files = Vec::with_capacity(paths.len());
                for path in &paths {
                    files.push(read_upload(path).await?);
                }
                upload.upload_images(files).await?
            },
            Self::Delete { filename } => upload.delete_image(&filename).await?,
            Self::List => upload.list_images().await?,
        };
        Ok(value)
    }
}

impl ContactCommand {
    /// Run against the backend
    pub async fn run(self, api: &ApiClient) -> anyhow::Result<Value> {
        let contact = api.contact();
        let value = match self {
            Self::Submit {
                name,
                email,
                message,
                company,
                phone,
                project_type,
                budget,
                timeline,
            } => {
                let submission = ContactSubmission {
                    company,
                    phone,
                    project_type,
                    budget,
                    timeline,
                    ..ContactSubmission::new(name, email, message)
                };
                validate_payload(&submission)?;
                contact.submit_form(&submission).await?
            },
            Self::List {
                status,
                search,
                paging,
            } => {
                let query = ContactQuery {
                    status,
                    search,
                    page: paging.page,
                    limit: paging.limit,
                };
                contact.get_contacts(&query).await?
            },
            Self::Get { id } => contact.get_contact(&id).await?,
            Self::Update { id, status, notes } => {
                contact
                    .update_contact(&id, &ContactUpdate { status, notes })
                    .await?
            },
            Self::Delete { id } => contact.delete_contact(&id).await?,
            Self::Stats => contact.get_stats().await?,
        };
        Ok(value)
    }
}
