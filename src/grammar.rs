//! Descriptor grammar.
//!
//! This module documents the document shape understood by this library and
//! declares the child-element table of every production.
//!
//! # Overview
//!
//! A descriptor is a single `<project>` element. Every production is an
//! element whose direct children are *fields*, each of which may appear at
//! most once:
//!
//! ```xml
//! <project>
//!   <groupId>org.example</groupId>
//!   <artifactId>core</artifactId>
//!   <dependencies>
//!     <dependency>
//!       <groupId>org.example</groupId>
//!       <artifactId>util</artifactId>
//!     </dependency>
//!   </dependencies>
//! </project>
//! ```
//!
//! # Field kinds
//!
//! | Kind | Shape | Read as |
//! |------|-------|---------|
//! | Text | `<name>text</name>` | trimmed `String` |
//! | Flag | `<enabled>true</enabled>` | `bool`, blank uses the field default |
//! | List | `<roles><role>a</role>…</roles>` | `Vec<String>` in document order |
//! | Entity list | `<licenses><license>…</license>…</licenses>` | `Vec<Entity>` |
//! | Entity | `<scm>…</scm>` | nested entity |
//! | Properties | `<properties><key>value</key>…</properties>` | [`Properties`](crate::Properties) |
//! | Free-form | `<configuration>…</configuration>` | [`Dom`](crate::Dom) |
//!
//! A field absent from the document is unset. A list or entity list whose
//! wrapper is present but empty is an empty `Vec`.
//!
//! ## Blank text
//!
//! Text fields keep blank content as `""`, except `email` and `organization`
//! of a contributor, which read blank content as unset.
//!
//! ## Flags
//!
//! | Field | Blank text |
//! |-------|------------|
//! | `activation/activeByDefault` | `false` |
//! | `repository/uniqueVersion` (deployment) | `true` |
//! | `notifier/sendOnError`, `sendOnFailure`, `sendOnSuccess`, `sendOnWarning` | `true` |
//!
//! ## Aliases
//!
//! `organization`, `organizationUrl` (on developers and contributors) are also
//! accepted as `organisation` and `organisationUrl`. Both spellings name the
//! same field, so writing both is a duplicated tag.
//!
//! # Attributes
//!
//! No production declares attributes. Attributes with a namespace prefix
//! (`xsi:schemaLocation`) are ignored, and so is `xmlns` on the root. Any
//! other attribute is unknown.
//!
//! # Strict and lenient reading
//!
//! | Construct | Strict | Lenient |
//! |-----------|--------|---------|
//! | Unknown child element | error | skipped with its subtree |
//! | Unknown attribute | error | ignored |
//! | Repeated field | error | skipped, first occurrence kept |
//! | Text between child elements | error unless whitespace | ignored |
//! | Malformed number | error | `0` |
//! | Wrong root element | error | read anyway |
//!
//! Items of a list and entries of a property bag never tolerate stray text.
//! Malformed XML, a child element inside a text field, a document ending
//! inside an element and a free-form tree nested deeper than
//! [`dom::MAX_DEPTH`](crate::dom::MAX_DEPTH) are errors in both modes.
//!
//! # Properties
//!
//! Property bags take every direct child as one entry: the tag name is the
//! key and the trimmed text the value. Keys are not checked for duplicates;
//! a repeated key replaces the earlier value.
//!
//! # Free-form trees
//!
//! Free-form fields keep the element as written, including all attributes.
//! See [`dom`](crate::dom) for the exact rules.

use crate::fields::field_table;

field_table! {
    pub(crate) enum ModelField in MODEL {
        ModelVersion = "modelVersion",
        Parent = "parent",
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        Packaging = "packaging",
        Name = "name",
        Description = "description",
        Url = "url",
        InceptionYear = "inceptionYear",
        Organization = "organization" | "organisation",
        Licenses = "licenses",
        Developers = "developers",
        Contributors = "contributors",
        MailingLists = "mailingLists",
        Prerequisites = "prerequisites",
        Modules = "modules",
        Scm = "scm",
        IssueManagement = "issueManagement",
        CiManagement = "ciManagement",
        DistributionManagement = "distributionManagement",
        Properties = "properties",
        DependencyManagement = "dependencyManagement",
        Dependencies = "dependencies",
        Repositories = "repositories",
        PluginRepositories = "pluginRepositories",
        Build = "build",
        Reports = "reports",
        Reporting = "reporting",
        Profiles = "profiles",
    }
}

field_table! {
    pub(crate) enum ModelBaseField in MODEL_BASE {
        Modules = "modules",
        DistributionManagement = "distributionManagement",
        Properties = "properties",
        DependencyManagement = "dependencyManagement",
        Dependencies = "dependencies",
        Repositories = "repositories",
        PluginRepositories = "pluginRepositories",
        Reports = "reports",
        Reporting = "reporting",
    }
}

field_table! {
    pub(crate) enum ParentField in PARENT {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        RelativePath = "relativePath",
    }
}

field_table! {
    pub(crate) enum OrganizationField in ORGANIZATION {
        Name = "name",
        Url = "url",
    }
}

field_table! {
    pub(crate) enum LicenseField in LICENSE {
        Name = "name",
        Url = "url",
        Distribution = "distribution",
        Comments = "comments",
    }
}

field_table! {
    pub(crate) enum DeveloperField in DEVELOPER {
        Id = "id",
        Name = "name",
        Email = "email",
        Url = "url",
        Organization = "organization" | "organisation",
        OrganizationUrl = "organizationUrl" | "organisationUrl",
        Roles = "roles",
        Timezone = "timezone",
        Properties = "properties",
    }
}

field_table! {
    pub(crate) enum ContributorField in CONTRIBUTOR {
        Name = "name",
        Email = "email",
        Url = "url",
        Organization = "organization" | "organisation",
        OrganizationUrl = "organizationUrl" | "organisationUrl",
        Roles = "roles",
        Timezone = "timezone",
        Properties = "properties",
    }
}

field_table! {
    pub(crate) enum MailingListField in MAILING_LIST {
        Name = "name",
        Subscribe = "subscribe",
        Unsubscribe = "unsubscribe",
        Post = "post",
        Archive = "archive",
        OtherArchives = "otherArchives",
    }
}

field_table! {
    pub(crate) enum PrerequisitesField in PREREQUISITES {
        Maven = "maven",
    }
}

field_table! {
    pub(crate) enum ScmField in SCM {
        Connection = "connection",
        DeveloperConnection = "developerConnection",
        Tag = "tag",
        Url = "url",
    }
}

field_table! {
    pub(crate) enum IssueManagementField in ISSUE_MANAGEMENT {
        System = "system",
        Url = "url",
    }
}

field_table! {
    pub(crate) enum CiManagementField in CI_MANAGEMENT {
        System = "system",
        Url = "url",
        Notifiers = "notifiers",
    }
}

field_table! {
    pub(crate) enum NotifierField in NOTIFIER {
        Type = "type",
        SendOnError = "sendOnError",
        SendOnFailure = "sendOnFailure",
        SendOnSuccess = "sendOnSuccess",
        SendOnWarning = "sendOnWarning",
        Address = "address",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum DistributionManagementField in DISTRIBUTION_MANAGEMENT {
        Repository = "repository",
        SnapshotRepository = "snapshotRepository",
        Site = "site",
        DownloadUrl = "downloadUrl",
        Relocation = "relocation",
        Status = "status",
    }
}

field_table! {
    pub(crate) enum DeploymentRepositoryField in DEPLOYMENT_REPOSITORY {
        UniqueVersion = "uniqueVersion",
        Releases = "releases",
        Snapshots = "snapshots",
        Id = "id",
        Name = "name",
        Url = "url",
        Layout = "layout",
    }
}

field_table! {
    pub(crate) enum SiteField in SITE {
        Id = "id",
        Name = "name",
        Url = "url",
    }
}

field_table! {
    pub(crate) enum RelocationField in RELOCATION {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        Message = "message",
    }
}

field_table! {
    pub(crate) enum RepositoryField in REPOSITORY {
        Releases = "releases",
        Snapshots = "snapshots",
        Id = "id",
        Name = "name",
        Url = "url",
        Layout = "layout",
    }
}

field_table! {
    pub(crate) enum RepositoryBaseField in REPOSITORY_BASE {
        Id = "id",
        Name = "name",
        Url = "url",
        Layout = "layout",
    }
}

field_table! {
    pub(crate) enum RepositoryPolicyField in REPOSITORY_POLICY {
        Enabled = "enabled",
        UpdatePolicy = "updatePolicy",
        ChecksumPolicy = "checksumPolicy",
    }
}

field_table! {
    pub(crate) enum DependencyManagementField in DEPENDENCY_MANAGEMENT {
        Dependencies = "dependencies",
    }
}

field_table! {
    pub(crate) enum DependencyField in DEPENDENCY {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        Type = "type",
        Classifier = "classifier",
        Scope = "scope",
        SystemPath = "systemPath",
        Exclusions = "exclusions",
        Optional = "optional",
    }
}

field_table! {
    pub(crate) enum ExclusionField in EXCLUSION {
        GroupId = "groupId",
        ArtifactId = "artifactId",
    }
}

field_table! {
    pub(crate) enum BuildField in BUILD {
        SourceDirectory = "sourceDirectory",
        ScriptSourceDirectory = "scriptSourceDirectory",
        TestSourceDirectory = "testSourceDirectory",
        OutputDirectory = "outputDirectory",
        TestOutputDirectory = "testOutputDirectory",
        Extensions = "extensions",
        DefaultGoal = "defaultGoal",
        Resources = "resources",
        TestResources = "testResources",
        Directory = "directory",
        FinalName = "finalName",
        Filters = "filters",
        PluginManagement = "pluginManagement",
        Plugins = "plugins",
    }
}

field_table! {
    pub(crate) enum BuildBaseField in BUILD_BASE {
        DefaultGoal = "defaultGoal",
        Resources = "resources",
        TestResources = "testResources",
        Directory = "directory",
        FinalName = "finalName",
        Filters = "filters",
        PluginManagement = "pluginManagement",
        Plugins = "plugins",
    }
}

field_table! {
    pub(crate) enum ExtensionField in EXTENSION {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
    }
}

field_table! {
    pub(crate) enum ResourceField in RESOURCE {
        TargetPath = "targetPath",
        Filtering = "filtering",
        Directory = "directory",
        Includes = "includes",
        Excludes = "excludes",
    }
}

field_table! {
    pub(crate) enum FileSetField in FILE_SET {
        Directory = "directory",
        Includes = "includes",
        Excludes = "excludes",
    }
}

field_table! {
    pub(crate) enum PatternSetField in PATTERN_SET {
        Includes = "includes",
        Excludes = "excludes",
    }
}

// Also the table of plugin management.
field_table! {
    pub(crate) enum PluginContainerField in PLUGIN_CONTAINER {
        Plugins = "plugins",
    }
}

field_table! {
    pub(crate) enum PluginConfigurationField in PLUGIN_CONFIGURATION {
        PluginManagement = "pluginManagement",
        Plugins = "plugins",
    }
}

field_table! {
    pub(crate) enum PluginField in PLUGIN {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        Extensions = "extensions",
        Executions = "executions",
        Dependencies = "dependencies",
        Goals = "goals",
        Inherited = "inherited",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum PluginExecutionField in PLUGIN_EXECUTION {
        Id = "id",
        Phase = "phase",
        Goals = "goals",
        Inherited = "inherited",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum ConfigurationContainerField in CONFIGURATION_CONTAINER {
        Inherited = "inherited",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum ReportingField in REPORTING {
        ExcludeDefaults = "excludeDefaults",
        OutputDirectory = "outputDirectory",
        Plugins = "plugins",
    }
}

field_table! {
    pub(crate) enum ReportPluginField in REPORT_PLUGIN {
        GroupId = "groupId",
        ArtifactId = "artifactId",
        Version = "version",
        ReportSets = "reportSets",
        Inherited = "inherited",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum ReportSetField in REPORT_SET {
        Id = "id",
        Reports = "reports",
        Inherited = "inherited",
        Configuration = "configuration",
    }
}

field_table! {
    pub(crate) enum ProfileField in PROFILE {
        Id = "id",
        Activation = "activation",
        Build = "build",
        Modules = "modules",
        DistributionManagement = "distributionManagement",
        Properties = "properties",
        DependencyManagement = "dependencyManagement",
        Dependencies = "dependencies",
        Repositories = "repositories",
        PluginRepositories = "pluginRepositories",
        Reports = "reports",
        Reporting = "reporting",
    }
}

field_table! {
    pub(crate) enum ActivationField in ACTIVATION {
        ActiveByDefault = "activeByDefault",
        Jdk = "jdk",
        Os = "os",
        Property = "property",
        File = "file",
    }
}

field_table! {
    pub(crate) enum ActivationOsField in ACTIVATION_OS {
        Name = "name",
        Family = "family",
        Arch = "arch",
        Version = "version",
    }
}

field_table! {
    pub(crate) enum ActivationPropertyField in ACTIVATION_PROPERTY {
        Name = "name",
        Value = "value",
    }
}

field_table! {
    pub(crate) enum ActivationFileField in ACTIVATION_FILE {
        Missing = "missing",
        Exists = "exists",
    }
}
