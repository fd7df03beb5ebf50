//! The immutable descriptor model.
//!
//! Every grammar production has an entity type here. Entities are read-only:
//! their fields are private and exposed through accessors returning
//! `Option<&T>`, where `None` means the element was absent from the document.
//! The only way to make one is its builder:
//!
//! ```rust
//! use pom_reader::{Dependency, Exclusion, Identity};
//!
//! let make = || {
//!     let mut exclusion = Exclusion::builder();
//!     exclusion.group_id = Some("log4j".to_string());
//!
//!     let mut builder = Dependency::builder();
//!     builder.group_id = Some("org.example".to_string());
//!     builder.artifact_id = Some("core".to_string());
//!     builder.exclusions = Some(vec![exclusion.build()]);
//!     builder.build()
//! };
//!
//! let dependency = make();
//! assert_eq!(dependency.group_id().map(String::as_str), Some("org.example"));
//! assert_eq!(dependency.version(), None);
//!
//! let same = make();
//! assert_eq!(dependency, same);
//! assert_eq!(dependency.identity(), same.identity());
//! ```
//!
//! `build()` folds the fields into the entity's identity value (see
//! [`identity`](crate::identity)) once; [`Hash`] writes that cached value,
//! while [`PartialEq`] compares the fields themselves.
//!
//! Each entity also carries the [`Locations`] of its fields' start tags.
//! Locations never take part in equality, hashing or serialization.

use crate::identity::{Identity, IdentityFold};
use crate::{Dom, Properties};
use indexmap::IndexMap;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Where a field's start tag was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputLocation {
    pub line: usize,
    pub column: usize,
}

/// Start-tag locations keyed by canonical field name.
pub type Locations = IndexMap<&'static str, InputLocation>;

macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )*
            #[serde(skip)]
            identity: u32,
            #[serde(skip)]
            locations: Locations,
        }

        impl $name {
            #[must_use]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Returns a builder holding a copy of this entity's fields.
            #[must_use]
            pub fn to_builder(&self) -> $builder {
                $builder {
                    $($field: self.$field.clone(),)*
                    locations: self.locations.clone(),
                }
            }

            $(
                #[inline]
                #[must_use]
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*

            #[must_use]
            pub fn locations(&self) -> &Locations {
                &self.locations
            }

            /// Returns where the field with the given canonical name was read.
            #[must_use]
            pub fn location(&self, field: &str) -> Option<InputLocation> {
                self.locations.get(field).copied()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u32(self.identity);
            }
        }

        impl Identity for $name {
            #[inline]
            fn identity(&self) -> u32 {
                self.identity
            }
        }

        #[doc = concat!("Collects the fields of a [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default)]
        pub struct $builder {
            $(pub $field: Option<$ty>,)*
            pub locations: Locations,
        }

        impl $builder {
            /// Freezes the collected fields.
            #[must_use]
            pub fn build(self) -> $name {
                let identity = IdentityFold::new()
                    $(.field(&self.$field))*
                    .finish();
                $name {
                    $($field: self.$field,)*
                    identity,
                    locations: self.locations,
                }
            }
        }
    };
}

entity! {
    /// The root of a descriptor, read from `<project>`.
    pub struct Model / ModelBuilder {
        model_version: String,
        parent: Parent,
        group_id: String,
        artifact_id: String,
        version: String,
        packaging: String,
        name: String,
        description: String,
        url: String,
        inception_year: String,
        organization: Organization,
        licenses: Vec<License>,
        developers: Vec<Developer>,
        contributors: Vec<Contributor>,
        mailing_lists: Vec<MailingList>,
        prerequisites: Prerequisites,
        modules: Vec<String>,
        scm: Scm,
        issue_management: IssueManagement,
        ci_management: CiManagement,
        distribution_management: DistributionManagement,
        properties: Properties,
        dependency_management: DependencyManagement,
        dependencies: Vec<Dependency>,
        repositories: Vec<Repository>,
        plugin_repositories: Vec<Repository>,
        build: Build,
        reports: Dom,
        reporting: Reporting,
        profiles: Vec<Profile>,
        /// Taken from the XML declaration, not from an element.
        model_encoding: String,
    }
}

entity! {
    /// The part of a descriptor that profiles can override.
    pub struct ModelBase / ModelBaseBuilder {
        modules: Vec<String>,
        distribution_management: DistributionManagement,
        properties: Properties,
        dependency_management: DependencyManagement,
        dependencies: Vec<Dependency>,
        repositories: Vec<Repository>,
        plugin_repositories: Vec<Repository>,
        reports: Dom,
        reporting: Reporting,
    }
}

entity! {
    pub struct Parent / ParentBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
        relative_path: String,
    }
}

entity! {
    /// Also accepted under the `organisation` spelling.
    pub struct Organization / OrganizationBuilder {
        name: String,
        url: String,
    }
}

entity! {
    pub struct License / LicenseBuilder {
        name: String,
        url: String,
        distribution: String,
        comments: String,
    }
}

entity! {
    pub struct Developer / DeveloperBuilder {
        id: String,
        name: String,
        email: String,
        url: String,
        organization: String,
        organization_url: String,
        roles: Vec<String>,
        timezone: String,
        properties: Properties,
    }
}

entity! {
    /// A contributor. Blank `email` and `organization` are read as unset.
    pub struct Contributor / ContributorBuilder {
        name: String,
        email: String,
        url: String,
        organization: String,
        organization_url: String,
        roles: Vec<String>,
        timezone: String,
        properties: Properties,
    }
}

entity! {
    pub struct MailingList / MailingListBuilder {
        name: String,
        subscribe: String,
        unsubscribe: String,
        post: String,
        archive: String,
        other_archives: Vec<String>,
    }
}

entity! {
    pub struct Prerequisites / PrerequisitesBuilder {
        maven: String,
    }
}

entity! {
    pub struct Scm / ScmBuilder {
        connection: String,
        developer_connection: String,
        tag: String,
        url: String,
    }
}

entity! {
    pub struct IssueManagement / IssueManagementBuilder {
        system: String,
        url: String,
    }
}

entity! {
    pub struct CiManagement / CiManagementBuilder {
        system: String,
        url: String,
        notifiers: Vec<Notifier>,
    }
}

entity! {
    /// A build notifier. The `send_on_*` flags read blank text as `true`.
    pub struct Notifier / NotifierBuilder {
        #[serde(rename = "type")]
        type_: String,
        send_on_error: bool,
        send_on_failure: bool,
        send_on_success: bool,
        send_on_warning: bool,
        address: String,
        configuration: Properties,
    }
}

entity! {
    pub struct DistributionManagement / DistributionManagementBuilder {
        repository: DeploymentRepository,
        snapshot_repository: DeploymentRepository,
        site: Site,
        download_url: String,
        relocation: Relocation,
        status: String,
    }
}

entity! {
    /// A deployment target. `unique_version` reads blank text as `true`.
    pub struct DeploymentRepository / DeploymentRepositoryBuilder {
        unique_version: bool,
        releases: RepositoryPolicy,
        snapshots: RepositoryPolicy,
        id: String,
        name: String,
        url: String,
        layout: String,
    }
}

entity! {
    pub struct Site / SiteBuilder {
        id: String,
        name: String,
        url: String,
    }
}

entity! {
    pub struct Relocation / RelocationBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
        message: String,
    }
}

entity! {
    pub struct Repository / RepositoryBuilder {
        releases: RepositoryPolicy,
        snapshots: RepositoryPolicy,
        id: String,
        name: String,
        url: String,
        layout: String,
    }
}

entity! {
    pub struct RepositoryBase / RepositoryBaseBuilder {
        id: String,
        name: String,
        url: String,
        layout: String,
    }
}

entity! {
    pub struct RepositoryPolicy / RepositoryPolicyBuilder {
        enabled: String,
        update_policy: String,
        checksum_policy: String,
    }
}

entity! {
    pub struct DependencyManagement / DependencyManagementBuilder {
        dependencies: Vec<Dependency>,
    }
}

entity! {
    pub struct Dependency / DependencyBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
        #[serde(rename = "type")]
        type_: String,
        classifier: String,
        scope: String,
        system_path: String,
        exclusions: Vec<Exclusion>,
        optional: String,
    }
}

entity! {
    pub struct Exclusion / ExclusionBuilder {
        group_id: String,
        artifact_id: String,
    }
}

entity! {
    pub struct Build / BuildBuilder {
        source_directory: String,
        script_source_directory: String,
        test_source_directory: String,
        output_directory: String,
        test_output_directory: String,
        extensions: Vec<Extension>,
        default_goal: String,
        resources: Vec<Resource>,
        test_resources: Vec<Resource>,
        directory: String,
        final_name: String,
        filters: Vec<String>,
        plugin_management: PluginManagement,
        plugins: Vec<Plugin>,
    }
}

entity! {
    /// The build settings a profile may override.
    pub struct BuildBase / BuildBaseBuilder {
        default_goal: String,
        resources: Vec<Resource>,
        test_resources: Vec<Resource>,
        directory: String,
        final_name: String,
        filters: Vec<String>,
        plugin_management: PluginManagement,
        plugins: Vec<Plugin>,
    }
}

entity! {
    pub struct Extension / ExtensionBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
    }
}

entity! {
    pub struct Resource / ResourceBuilder {
        target_path: String,
        filtering: String,
        directory: String,
        includes: Vec<String>,
        excludes: Vec<String>,
    }
}

entity! {
    pub struct FileSet / FileSetBuilder {
        directory: String,
        includes: Vec<String>,
        excludes: Vec<String>,
    }
}

entity! {
    pub struct PatternSet / PatternSetBuilder {
        includes: Vec<String>,
        excludes: Vec<String>,
    }
}

entity! {
    pub struct PluginManagement / PluginManagementBuilder {
        plugins: Vec<Plugin>,
    }
}

entity! {
    pub struct PluginContainer / PluginContainerBuilder {
        plugins: Vec<Plugin>,
    }
}

entity! {
    pub struct PluginConfiguration / PluginConfigurationBuilder {
        plugin_management: PluginManagement,
        plugins: Vec<Plugin>,
    }
}

entity! {
    /// A build plugin. `goals` and `configuration` are kept as free-form trees.
    pub struct Plugin / PluginBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
        extensions: String,
        executions: Vec<PluginExecution>,
        dependencies: Vec<Dependency>,
        goals: Dom,
        inherited: String,
        configuration: Dom,
    }
}

entity! {
    pub struct PluginExecution / PluginExecutionBuilder {
        id: String,
        phase: String,
        goals: Vec<String>,
        inherited: String,
        configuration: Dom,
    }
}

entity! {
    pub struct ConfigurationContainer / ConfigurationContainerBuilder {
        inherited: String,
        configuration: Dom,
    }
}

entity! {
    pub struct Reporting / ReportingBuilder {
        exclude_defaults: String,
        output_directory: String,
        plugins: Vec<ReportPlugin>,
    }
}

entity! {
    pub struct ReportPlugin / ReportPluginBuilder {
        group_id: String,
        artifact_id: String,
        version: String,
        report_sets: Vec<ReportSet>,
        inherited: String,
        configuration: Dom,
    }
}

entity! {
    pub struct ReportSet / ReportSetBuilder {
        id: String,
        reports: Vec<String>,
        inherited: String,
        configuration: Dom,
    }
}

entity! {
    /// A build profile. When read from a document, `properties` is always
    /// present, empty if the element was absent.
    pub struct Profile / ProfileBuilder {
        id: String,
        activation: Activation,
        build: BuildBase,
        modules: Vec<String>,
        distribution_management: DistributionManagement,
        properties: Properties,
        dependency_management: DependencyManagement,
        dependencies: Vec<Dependency>,
        repositories: Vec<Repository>,
        plugin_repositories: Vec<Repository>,
        reports: Dom,
        reporting: Reporting,
    }
}

entity! {
    pub struct Activation / ActivationBuilder {
        active_by_default: bool,
        jdk: String,
        os: ActivationOs,
        property: ActivationProperty,
        file: ActivationFile,
    }
}

entity! {
    pub struct ActivationOs / ActivationOsBuilder {
        name: String,
        family: String,
        arch: String,
        version: String,
    }
}

entity! {
    pub struct ActivationProperty / ActivationPropertyBuilder {
        name: String,
        value: String,
    }
}

entity! {
    pub struct ActivationFile / ActivationFileBuilder {
        missing: String,
        exists: String,
    }
}
