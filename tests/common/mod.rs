//! A minimal descriptor writer used as a reference for round-trip tests.
//!
//! It covers the productions generated by the property tests, writing fields
//! in grammar order and only when set.

#![allow(dead_code)]

use pom_reader::{
    Activation, Build, Dependency, Dom, Exclusion, License, Model, Parent, Plugin,
    PluginExecution, Profile, Properties,
};
use quick_xml::escape::escape;

#[derive(Default)]
pub struct XmlWriter {
    out: String,
}

impl XmlWriter {
    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, name: &str) {
        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
    }

    fn close(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn text(&mut self, name: &str, value: Option<&String>) {
        if let Some(value) = value {
            self.open(name);
            self.out.push_str(&escape(value.as_str()));
            self.close(name);
        }
    }

    fn flag(&mut self, name: &str, value: Option<&bool>) {
        if let Some(value) = value {
            self.text(name, Some(&value.to_string()));
        }
    }

    fn strings(&mut self, wrapper: &str, item: &str, values: Option<&Vec<String>>) {
        if let Some(values) = values {
            self.open(wrapper);
            for value in values {
                self.text(item, Some(value));
            }
            self.close(wrapper);
        }
    }

    fn list<T>(&mut self, wrapper: &str, item: &str, values: Option<&Vec<T>>, write: fn(&mut Self, &str, &T)) {
        if let Some(values) = values {
            self.open(wrapper);
            for value in values {
                write(self, item, value);
            }
            self.close(wrapper);
        }
    }

    fn entity<T>(&mut self, name: &str, value: Option<&T>, write: fn(&mut Self, &str, &T)) {
        if let Some(value) = value {
            write(self, name, value);
        }
    }

    fn properties(&mut self, name: &str, value: Option<&Properties>) {
        if let Some(properties) = value {
            self.open(name);
            for (key, value) in properties {
                self.text(key, Some(value));
            }
            self.close(name);
        }
    }

    fn dom(&mut self, value: Option<&Dom>) {
        if let Some(node) = value {
            self.out.push_str(&node.to_string());
        }
    }
}

pub fn write_model(model: &Model) -> String {
    let mut w = XmlWriter::default();
    w.open("project");
    w.text("modelVersion", model.model_version());
    w.entity("parent", model.parent(), write_parent);
    w.text("groupId", model.group_id());
    w.text("artifactId", model.artifact_id());
    w.text("version", model.version());
    w.text("packaging", model.packaging());
    w.text("name", model.name());
    w.text("description", model.description());
    w.list("licenses", "license", model.licenses(), write_license);
    w.strings("modules", "module", model.modules());
    w.properties("properties", model.properties());
    w.list("dependencies", "dependency", model.dependencies(), write_dependency);
    w.entity("build", model.build(), write_build);
    w.list("profiles", "profile", model.profiles(), write_profile);
    w.close("project");
    w.finish()
}

fn write_parent(w: &mut XmlWriter, name: &str, parent: &Parent) {
    w.open(name);
    w.text("groupId", parent.group_id());
    w.text("artifactId", parent.artifact_id());
    w.text("version", parent.version());
    w.text("relativePath", parent.relative_path());
    w.close(name);
}

fn write_license(w: &mut XmlWriter, name: &str, license: &License) {
    w.open(name);
    w.text("name", license.name());
    w.text("url", license.url());
    w.text("distribution", license.distribution());
    w.text("comments", license.comments());
    w.close(name);
}

fn write_exclusion(w: &mut XmlWriter, name: &str, exclusion: &Exclusion) {
    w.open(name);
    w.text("groupId", exclusion.group_id());
    w.text("artifactId", exclusion.artifact_id());
    w.close(name);
}

pub fn write_dependency(w: &mut XmlWriter, name: &str, dependency: &Dependency) {
    w.open(name);
    w.text("groupId", dependency.group_id());
    w.text("artifactId", dependency.artifact_id());
    w.text("version", dependency.version());
    w.text("type", dependency.type_());
    w.text("classifier", dependency.classifier());
    w.text("scope", dependency.scope());
    w.text("systemPath", dependency.system_path());
    w.list("exclusions", "exclusion", dependency.exclusions(), write_exclusion);
    w.text("optional", dependency.optional());
    w.close(name);
}

fn write_execution(w: &mut XmlWriter, name: &str, execution: &PluginExecution) {
    w.open(name);
    w.text("id", execution.id());
    w.text("phase", execution.phase());
    w.strings("goals", "goal", execution.goals());
    w.text("inherited", execution.inherited());
    w.dom(execution.configuration());
    w.close(name);
}

fn write_plugin(w: &mut XmlWriter, name: &str, plugin: &Plugin) {
    w.open(name);
    w.text("groupId", plugin.group_id());
    w.text("artifactId", plugin.artifact_id());
    w.text("version", plugin.version());
    w.text("extensions", plugin.extensions());
    w.list("executions", "execution", plugin.executions(), write_execution);
    w.list("dependencies", "dependency", plugin.dependencies(), write_dependency);
    w.dom(plugin.goals());
    w.text("inherited", plugin.inherited());
    w.dom(plugin.configuration());
    w.close(name);
}

fn write_build(w: &mut XmlWriter, name: &str, build: &Build) {
    w.open(name);
    w.text("sourceDirectory", build.source_directory());
    w.text("defaultGoal", build.default_goal());
    w.text("directory", build.directory());
    w.text("finalName", build.final_name());
    w.strings("filters", "filter", build.filters());
    w.list("plugins", "plugin", build.plugins(), write_plugin);
    w.close(name);
}

fn write_activation(w: &mut XmlWriter, name: &str, activation: &Activation) {
    w.open(name);
    w.flag("activeByDefault", activation.active_by_default());
    w.text("jdk", activation.jdk());
    w.close(name);
}

fn write_profile(w: &mut XmlWriter, name: &str, profile: &Profile) {
    w.open(name);
    w.text("id", profile.id());
    w.entity("activation", profile.activation(), write_activation);
    w.strings("modules", "module", profile.modules());
    w.properties("properties", profile.properties());
    w.list("dependencies", "dependency", profile.dependencies(), write_dependency);
    w.close(name);
}
