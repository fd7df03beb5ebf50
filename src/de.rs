//! Descriptor deserialization.
//!
//! This module provides the [`Deserializer`], which pulls events from a
//! `quick-xml` reader and turns them into model entities, one grammar
//! production at a time.
//!
//! ## Overview
//!
//! - **Single pass**: every production consumes exactly the children of its
//!   start tag, up to and including the matching end tag. There is no
//!   backtracking; a child's tag name alone decides how it is read.
//! - **Bottom-up construction**: children are fully built before the parent
//!   that holds them, and each entity is frozen by its builder on return.
//! - **Request-scoped mode**: the strict flag lives in the deserializer, so
//!   concurrent reads never see each other's settings.
//! - **Positions**: errors and field locations carry the line and column of
//!   the tokenizer right after the offending tag.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root or
//! [`ModelReader`](crate::ModelReader). Any production can also be read on
//! its own:
//!
//! ```rust
//! use pom_reader::{Dependency, Deserializer, ReaderOptions};
//!
//! let xml = "<dependency><groupId>g</groupId><artifactId>a</artifactId></dependency>";
//! let mut de = Deserializer::from_str(xml, ReaderOptions::default());
//! let dependency: Dependency = de.read_root().unwrap();
//!
//! assert_eq!(dependency.artifact_id().map(String::as_str), Some("a"));
//! ```

use crate::coerce::Coercion;
use crate::dom::{self, Dom};
use crate::fields::{lookup, FieldDef, FieldGuard};
use crate::grammar::*;
use crate::model::*;
use crate::{Error, Properties, ReaderOptions, Result};
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt;
use tracing::{debug, trace};

/// An opening tag together with its attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTag {
    name: String,
    attributes: Vec<(String, String)>,
    empty: bool,
    line: usize,
    column: usize,
}

impl StartTag {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unescaped value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Whether the tag was written self-closing (`<a/>`).
    #[inline]
    #[must_use]
    pub fn is_empty_element(&self) -> bool {
        self.empty
    }

    #[must_use]
    pub fn location(&self) -> InputLocation {
        InputLocation {
            line: self.line,
            column: self.column,
        }
    }
}

enum Token {
    Start(StartTag),
    End,
    Text(String),
    Eof,
}

/// The descriptor deserializer.
///
/// Wraps a `quick-xml` reader over one document. A deserializer is used for a
/// single read and then dropped.
pub struct Deserializer<'de> {
    reader: Reader<&'de [u8]>,
    input: &'de str,
    options: ReaderOptions,
    encoding: Option<String>,
    pending_end: bool, // A self-closing tag still owes its end event
    offset: usize,
    line: usize,
    column: usize,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str, options: ReaderOptions) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Deserializer {
            reader: Reader::from_str(input),
            input,
            options,
            encoding: None,
            pending_end: false,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Sets the encoding reported when the document has no XML declaration.
    #[must_use]
    pub fn with_default_encoding(mut self, encoding: &str) -> Self {
        self.encoding = Some(encoding.to_string());
        self
    }

    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Returns the document encoding seen so far.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Skips the preamble and reads the first element as an `E`.
    ///
    /// In strict mode the element must be named [`Production::TAG`]; in
    /// lenient mode any element is read as an `E`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::WrongRootElement`] or [`Error::MissingRootElement`]
    /// when the document has no suitable root, and with any error raised while
    /// reading the root itself.
    pub fn read_root<E: Production>(&mut self) -> Result<E> {
        debug!(root = E::TAG, strict = self.options.strict, "Reading document");
        loop {
            match self.next_token()? {
                Token::Start(tag) => {
                    if self.options.strict && tag.name != E::TAG {
                        return Err(Error::wrong_root_element(
                            tag.line, tag.column, E::TAG, &tag.name,
                        ));
                    }
                    let root = E::parse(self, &tag)?;
                    debug!(root = E::TAG, "Finished reading document");
                    return Ok(root);
                }
                Token::Text(_) | Token::End => {}
                Token::Eof => {
                    let (line, col) = self.position();
                    return Err(Error::missing_root_element(line, col, E::TAG));
                }
            }
        }
    }

    fn position(&mut self) -> (usize, usize) {
        let offset = (self.reader.buffer_position() as usize).min(self.input.len());
        if offset < self.offset {
            self.offset = 0;
            self.line = 1;
            self.column = 1;
        }
        if let Some(consumed) = self.input.get(self.offset..offset) {
            for ch in consumed.chars() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = offset;
        }
        (self.line, self.column)
    }

    fn xml_error<T: fmt::Display>(&mut self, err: T) -> Error {
        let (line, col) = self.position();
        Error::xml(line, col, err)
    }

    fn eof(&mut self, open: &str) -> Error {
        let (line, col) = self.position();
        Error::unexpected_eof(line, col, &format!("end tag '</{}>'", open))
    }

    fn utf8<'a>(&mut self, raw: &'a [u8]) -> Result<&'a str> {
        match std::str::from_utf8(raw) {
            Ok(text) => Ok(text),
            Err(err) => {
                let (line, col) = self.position();
                Err(Error::encoding(format!("{} at line {}, column {}", err, line, col)))
            }
        }
    }

    fn unescape(&mut self, raw: &[u8]) -> Result<String> {
        let raw = self.utf8(raw)?;
        let html = self.options.add_default_entities;
        match unescape_with(raw, |entity| resolve_entity(entity, html)) {
            Ok(text) => Ok(text.into_owned()),
            Err(err) => Err(self.xml_error(err)),
        }
    }

    fn start_tag(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<StartTag> {
        let name = self.utf8(e.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = match attr {
                Ok(attr) => attr,
                Err(err) => return Err(self.xml_error(err)),
            };
            let key = self.utf8(attr.key.as_ref())?.to_string();
            let value = self.unescape(&attr.value)?;
            attributes.push((key, value));
        }
        let (line, column) = self.position();
        Ok(StartTag {
            name,
            attributes,
            empty,
            line,
            column,
        })
    }

    fn next_token(&mut self) -> Result<Token> {
        if self.pending_end {
            self.pending_end = false;
            return Ok(Token::End);
        }
        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => return Err(self.xml_error(err)),
            };
            match event {
                Event::Start(e) => return self.start_tag(&e, false).map(Token::Start),
                Event::Empty(e) => {
                    let tag = self.start_tag(&e, true)?;
                    self.pending_end = true;
                    return Ok(Token::Start(tag));
                }
                Event::End(_) => return Ok(Token::End),
                Event::Text(e) => return self.unescape(&e).map(Token::Text),
                Event::CData(e) => return self.utf8(&e).map(|text| Token::Text(text.to_string())),
                Event::Decl(decl) => {
                    if let Some(Ok(encoding)) = decl.encoding() {
                        self.encoding = Some(String::from_utf8_lossy(&encoding).into_owned());
                    }
                }
                Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => return Ok(Token::Eof),
            }
        }
    }

    /// Advances to the next child of `parent`, or `None` at its end tag.
    ///
    /// Whitespace between tags is always skipped; other text is an error when
    /// `strict_text` is set.
    fn next_tag(&mut self, parent: &StartTag, strict_text: bool) -> Result<Option<StartTag>> {
        loop {
            match self.next_token()? {
                Token::Start(tag) => return Ok(Some(tag)),
                Token::End => return Ok(None),
                Token::Text(text) => {
                    let text = text.trim();
                    if strict_text && !text.is_empty() {
                        let (line, col) = self.position();
                        return Err(Error::unexpected_content(
                            line,
                            col,
                            &format!("expected a start or end tag in '{}', found text '{}'", parent.name, text),
                        ));
                    }
                }
                Token::Eof => return Err(self.eof(&parent.name)),
            }
        }
    }

    #[inline]
    fn next_child(&mut self, parent: &StartTag) -> Result<Option<StartTag>> {
        let strict = self.options.strict;
        self.next_tag(parent, strict)
    }

    /// Reads the text content of `tag`, trimmed.
    fn read_text(&mut self, tag: &StartTag) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End => break,
                Token::Start(child) => {
                    return Err(Error::unexpected_content(
                        child.line,
                        child.column,
                        &format!("element '{}' is not allowed inside text element '{}'", child.name, tag.name),
                    ))
                }
                Token::Eof => return Err(self.eof(&tag.name)),
            }
        }
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            Ok(text)
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Consumes everything up to the end tag matching `tag`.
    fn skip_element(&mut self, tag: &StartTag) -> Result<()> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => return Err(self.eof(&tag.name)),
            }
        }
        Ok(())
    }

    fn unknown_child(&mut self, tag: &StartTag) -> Result<()> {
        if self.options.strict {
            return Err(Error::unrecognised_tag(tag.line, tag.column, &tag.name));
        }
        debug!(tag = tag.name.as_str(), "Skipping unrecognised element");
        self.skip_element(tag)
    }

    fn check_attributes(&self, tag: &StartTag, root: bool) -> Result<()> {
        for (name, _) in tag.attributes.iter().rev() {
            if name.contains(':') || (root && name == "xmlns") {
                continue;
            }
            if self.options.strict {
                return Err(Error::unknown_attribute(tag.line, tag.column, name, &tag.name));
            }
            debug!(
                attribute = name.as_str(),
                tag = tag.name.as_str(),
                "Ignoring unknown attribute"
            );
        }
        Ok(())
    }

    /// Resolves `tag` against a field table, applying the unknown-element and
    /// duplicate policies. `None` means the element was consumed already.
    fn field<F: Copy>(
        &mut self,
        table: &'static [FieldDef<F>],
        tag: &StartTag,
        guard: &mut FieldGuard,
    ) -> Result<Option<F>> {
        let Some(entry) = lookup(table, &tag.name) else {
            self.unknown_child(tag)?;
            return Ok(None);
        };
        if guard.accept(entry.name, tag.location()) {
            return Ok(Some(entry.field));
        }
        if self.options.strict {
            return Err(Error::duplicated_tag(tag.line, tag.column, entry.name));
        }
        debug!(tag = tag.name.as_str(), "Skipping duplicated element");
        self.skip_element(tag)?;
        Ok(None)
    }

    fn read_fields<F: Copy>(
        &mut self,
        start: &StartTag,
        table: &'static [FieldDef<F>],
        read: impl FnMut(&mut Self, F, &StartTag) -> Result<()>,
    ) -> Result<Locations> {
        self.check_attributes(start, false)?;
        self.read_children(start, table, read)
    }

    fn read_children<F: Copy>(
        &mut self,
        start: &StartTag,
        table: &'static [FieldDef<F>],
        mut read: impl FnMut(&mut Self, F, &StartTag) -> Result<()>,
    ) -> Result<Locations> {
        trace!("Parsing {}", start.name);
        let mut guard = FieldGuard::new();
        if start.empty {
            self.skip_element(start)?;
            return Ok(guard.into_locations());
        }
        while let Some(tag) = self.next_child(start)? {
            if let Some(field) = self.field(table, &tag, &mut guard)? {
                read(self, field, &tag)?;
            }
        }
        Ok(guard.into_locations())
    }

    fn string(&mut self, tag: &StartTag) -> Result<Option<String>> {
        self.read_text(tag).map(Some)
    }

    /// Like [`string`](Self::string), but blank text is unset.
    fn nonblank(&mut self, tag: &StartTag) -> Result<Option<String>> {
        let text = self.read_text(tag)?;
        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn flag(&mut self, tag: &StartTag, default: bool) -> Result<Option<bool>> {
        let text = self.read_text(tag)?;
        let coercion = Coercion::new(&tag.name, tag.line, tag.column, self.options.strict);
        Ok(Some(coercion.boolean(&text, default)))
    }

    fn strings(&mut self, tag: &StartTag, item: &str) -> Result<Option<Vec<String>>> {
        let mut items = Vec::new();
        while let Some(child) = self.next_tag(tag, true)? {
            if child.name == item {
                items.push(self.read_text(&child)?);
            } else {
                self.unknown_child(&child)?;
            }
        }
        Ok(Some(items))
    }

    fn list<E: Production>(&mut self, tag: &StartTag, item: &str) -> Result<Option<Vec<E>>> {
        let mut items = Vec::new();
        while let Some(child) = self.next_tag(tag, true)? {
            if child.name == item {
                items.push(E::parse(self, &child)?);
            } else {
                self.unknown_child(&child)?;
            }
        }
        Ok(Some(items))
    }

    fn entity<E: Production>(&mut self, tag: &StartTag) -> Result<Option<E>> {
        E::parse(self, tag).map(Some)
    }

    fn properties(&mut self, tag: &StartTag) -> Result<Option<Properties>> {
        let mut properties = Properties::new();
        while let Some(child) = self.next_tag(tag, true)? {
            let value = self.read_text(&child)?;
            properties.insert(child.name, value);
        }
        Ok(Some(properties))
    }

    fn dom(&mut self, tag: &StartTag) -> Result<Option<Dom>> {
        self.read_dom(tag).map(Some)
    }

    /// Reads a free-form element with an explicit stack of open nodes.
    fn read_dom(&mut self, start: &StartTag) -> Result<Dom> {
        let mut current = OpenNode::new(start);
        let mut parents: Vec<OpenNode> = Vec::new();
        loop {
            match self.next_token()? {
                Token::Start(child) => {
                    if parents.len() + 1 >= dom::MAX_DEPTH {
                        return Err(Error::unexpected_content(
                            child.line,
                            child.column,
                            &format!(
                                "free-form element '{}' is nested deeper than {} levels",
                                start.name,
                                dom::MAX_DEPTH
                            ),
                        ));
                    }
                    parents.push(std::mem::replace(&mut current, OpenNode::new(&child)));
                }
                Token::Text(chunk) => current.text.push_str(&chunk),
                Token::End => {
                    let node = current.finish();
                    match parents.pop() {
                        Some(mut parent) => {
                            parent.node.push_child(node);
                            current = parent;
                        }
                        None => return Ok(node),
                    }
                }
                Token::Eof => return Err(self.eof(current.node.name())),
            }
        }
    }
}

/// A free-form element whose end tag has not been read yet.
struct OpenNode {
    node: Dom,
    text: String,
    empty: bool,
    preserve: bool,
}

impl OpenNode {
    fn new(tag: &StartTag) -> Self {
        let mut node = Dom::new(tag.name.as_str());
        for (name, value) in &tag.attributes {
            node.insert_attribute(name.clone(), value.clone());
        }
        OpenNode {
            node,
            text: String::new(),
            empty: tag.empty,
            preserve: tag.attribute("xml:space") == Some("preserve"),
        }
    }

    fn finish(mut self) -> Dom {
        if self.node.is_leaf() && !self.empty {
            let value = if self.preserve {
                self.text
            } else {
                self.text.trim().to_string()
            };
            self.node.set_value(Some(value));
        }
        self.node
    }
}

fn resolve_entity(name: &str, html: bool) -> Option<&'static str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ if html => resolve_html5_entity(name),
        _ => None,
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A grammar production: an entity that can be read from an element.
///
/// Implemented for every entity of the model.
pub trait Production: Sized + sealed::Sealed {
    /// The element name the production is read from.
    const TAG: &'static str;

    /// Reads the element opened by `start`, through its end tag.
    fn parse(de: &mut Deserializer<'_>, start: &StartTag) -> Result<Self>;
}

macro_rules! production {
    ($entity:ident, $tag:literal, |$de:ident, $builder:ident, $start:ident| $body:block) => {
        impl sealed::Sealed for $entity {}

        impl Production for $entity {
            const TAG: &'static str = $tag;

            fn parse($de: &mut Deserializer<'_>, $start: &StartTag) -> Result<Self> {
                #[allow(unused_mut)]
                let mut $builder = $entity::builder();
                $body
                Ok($builder.build())
            }
        }
    };
}

production!(Model, "project", |de, b, start| {
    de.check_attributes(start, true)?;
    b.locations = de.read_children(start, MODEL, |de, field, tag| {
        match field {
            ModelField::ModelVersion => b.model_version = de.string(tag)?,
            ModelField::Parent => b.parent = de.entity(tag)?,
            ModelField::GroupId => b.group_id = de.string(tag)?,
            ModelField::ArtifactId => b.artifact_id = de.string(tag)?,
            ModelField::Version => b.version = de.string(tag)?,
            ModelField::Packaging => b.packaging = de.string(tag)?,
            ModelField::Name => b.name = de.string(tag)?,
            ModelField::Description => b.description = de.string(tag)?,
            ModelField::Url => b.url = de.string(tag)?,
            ModelField::InceptionYear => b.inception_year = de.string(tag)?,
            ModelField::Organization => b.organization = de.entity(tag)?,
            ModelField::Licenses => b.licenses = de.list(tag, "license")?,
            ModelField::Developers => b.developers = de.list(tag, "developer")?,
            ModelField::Contributors => b.contributors = de.list(tag, "contributor")?,
            ModelField::MailingLists => b.mailing_lists = de.list(tag, "mailingList")?,
            ModelField::Prerequisites => b.prerequisites = de.entity(tag)?,
            ModelField::Modules => b.modules = de.strings(tag, "module")?,
            ModelField::Scm => b.scm = de.entity(tag)?,
            ModelField::IssueManagement => b.issue_management = de.entity(tag)?,
            ModelField::CiManagement => b.ci_management = de.entity(tag)?,
            ModelField::DistributionManagement => b.distribution_management = de.entity(tag)?,
            ModelField::Properties => b.properties = de.properties(tag)?,
            ModelField::DependencyManagement => b.dependency_management = de.entity(tag)?,
            ModelField::Dependencies => b.dependencies = de.list(tag, "dependency")?,
            ModelField::Repositories => b.repositories = de.list(tag, "repository")?,
            ModelField::PluginRepositories => {
                b.plugin_repositories = de.list(tag, "pluginRepository")?
            }
            ModelField::Build => b.build = de.entity(tag)?,
            ModelField::Reports => b.reports = de.dom(tag)?,
            ModelField::Reporting => b.reporting = de.entity(tag)?,
            ModelField::Profiles => b.profiles = de.list(tag, "profile")?,
        }
        Ok(())
    })?;
    b.model_encoding = de.encoding.clone();
});

production!(ModelBase, "modelBase", |de, b, start| {
    b.locations = de.read_fields(start, MODEL_BASE, |de, field, tag| {
        match field {
            ModelBaseField::Modules => b.modules = de.strings(tag, "module")?,
            ModelBaseField::DistributionManagement => {
                b.distribution_management = de.entity(tag)?
            }
            ModelBaseField::Properties => b.properties = de.properties(tag)?,
            ModelBaseField::DependencyManagement => b.dependency_management = de.entity(tag)?,
            ModelBaseField::Dependencies => b.dependencies = de.list(tag, "dependency")?,
            ModelBaseField::Repositories => b.repositories = de.list(tag, "repository")?,
            ModelBaseField::PluginRepositories => {
                b.plugin_repositories = de.list(tag, "pluginRepository")?
            }
            ModelBaseField::Reports => b.reports = de.dom(tag)?,
            ModelBaseField::Reporting => b.reporting = de.entity(tag)?,
        }
        Ok(())
    })?;
});

production!(Parent, "parent", |de, b, start| {
    b.locations = de.read_fields(start, PARENT, |de, field, tag| {
        match field {
            ParentField::GroupId => b.group_id = de.string(tag)?,
            ParentField::ArtifactId => b.artifact_id = de.string(tag)?,
            ParentField::Version => b.version = de.string(tag)?,
            ParentField::RelativePath => b.relative_path = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Organization, "organization", |de, b, start| {
    b.locations = de.read_fields(start, ORGANIZATION, |de, field, tag| {
        match field {
            OrganizationField::Name => b.name = de.string(tag)?,
            OrganizationField::Url => b.url = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(License, "license", |de, b, start| {
    b.locations = de.read_fields(start, LICENSE, |de, field, tag| {
        match field {
            LicenseField::Name => b.name = de.string(tag)?,
            LicenseField::Url => b.url = de.string(tag)?,
            LicenseField::Distribution => b.distribution = de.string(tag)?,
            LicenseField::Comments => b.comments = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Developer, "developer", |de, b, start| {
    b.locations = de.read_fields(start, DEVELOPER, |de, field, tag| {
        match field {
            DeveloperField::Id => b.id = de.string(tag)?,
            DeveloperField::Name => b.name = de.string(tag)?,
            DeveloperField::Email => b.email = de.string(tag)?,
            DeveloperField::Url => b.url = de.string(tag)?,
            DeveloperField::Organization => b.organization = de.string(tag)?,
            DeveloperField::OrganizationUrl => b.organization_url = de.string(tag)?,
            DeveloperField::Roles => b.roles = de.strings(tag, "role")?,
            DeveloperField::Timezone => b.timezone = de.string(tag)?,
            DeveloperField::Properties => b.properties = de.properties(tag)?,
        }
        Ok(())
    })?;
});

production!(Contributor, "contributor", |de, b, start| {
    b.locations = de.read_fields(start, CONTRIBUTOR, |de, field, tag| {
        match field {
            ContributorField::Name => b.name = de.string(tag)?,
            ContributorField::Email => b.email = de.nonblank(tag)?,
            ContributorField::Url => b.url = de.string(tag)?,
            ContributorField::Organization => b.organization = de.nonblank(tag)?,
            ContributorField::OrganizationUrl => b.organization_url = de.string(tag)?,
            ContributorField::Roles => b.roles = de.strings(tag, "role")?,
            ContributorField::Timezone => b.timezone = de.string(tag)?,
            ContributorField::Properties => b.properties = de.properties(tag)?,
        }
        Ok(())
    })?;
});

production!(MailingList, "mailingList", |de, b, start| {
    b.locations = de.read_fields(start, MAILING_LIST, |de, field, tag| {
        match field {
            MailingListField::Name => b.name = de.string(tag)?,
            MailingListField::Subscribe => b.subscribe = de.string(tag)?,
            MailingListField::Unsubscribe => b.unsubscribe = de.string(tag)?,
            MailingListField::Post => b.post = de.string(tag)?,
            MailingListField::Archive => b.archive = de.string(tag)?,
            MailingListField::OtherArchives => {
                b.other_archives = de.strings(tag, "otherArchive")?
            }
        }
        Ok(())
    })?;
});

production!(Prerequisites, "prerequisites", |de, b, start| {
    b.locations = de.read_fields(start, PREREQUISITES, |de, field, tag| {
        match field {
            PrerequisitesField::Maven => b.maven = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Scm, "scm", |de, b, start| {
    b.locations = de.read_fields(start, SCM, |de, field, tag| {
        match field {
            ScmField::Connection => b.connection = de.string(tag)?,
            ScmField::DeveloperConnection => b.developer_connection = de.string(tag)?,
            ScmField::Tag => b.tag = de.string(tag)?,
            ScmField::Url => b.url = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(IssueManagement, "issueManagement", |de, b, start| {
    b.locations = de.read_fields(start, ISSUE_MANAGEMENT, |de, field, tag| {
        match field {
            IssueManagementField::System => b.system = de.string(tag)?,
            IssueManagementField::Url => b.url = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(CiManagement, "ciManagement", |de, b, start| {
    b.locations = de.read_fields(start, CI_MANAGEMENT, |de, field, tag| {
        match field {
            CiManagementField::System => b.system = de.string(tag)?,
            CiManagementField::Url => b.url = de.string(tag)?,
            CiManagementField::Notifiers => b.notifiers = de.list(tag, "notifier")?,
        }
        Ok(())
    })?;
});

production!(Notifier, "notifier", |de, b, start| {
    b.locations = de.read_fields(start, NOTIFIER, |de, field, tag| {
        match field {
            NotifierField::Type => b.type_ = de.string(tag)?,
            NotifierField::SendOnError => b.send_on_error = de.flag(tag, true)?,
            NotifierField::SendOnFailure => b.send_on_failure = de.flag(tag, true)?,
            NotifierField::SendOnSuccess => b.send_on_success = de.flag(tag, true)?,
            NotifierField::SendOnWarning => b.send_on_warning = de.flag(tag, true)?,
            NotifierField::Address => b.address = de.string(tag)?,
            NotifierField::Configuration => b.configuration = de.properties(tag)?,
        }
        Ok(())
    })?;
});

production!(DistributionManagement, "distributionManagement", |de, b, start| {
    b.locations = de.read_fields(start, DISTRIBUTION_MANAGEMENT, |de, field, tag| {
        match field {
            DistributionManagementField::Repository => b.repository = de.entity(tag)?,
            DistributionManagementField::SnapshotRepository => {
                b.snapshot_repository = de.entity(tag)?
            }
            DistributionManagementField::Site => b.site = de.entity(tag)?,
            DistributionManagementField::DownloadUrl => b.download_url = de.string(tag)?,
            DistributionManagementField::Relocation => b.relocation = de.entity(tag)?,
            DistributionManagementField::Status => b.status = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(DeploymentRepository, "repository", |de, b, start| {
    b.locations = de.read_fields(start, DEPLOYMENT_REPOSITORY, |de, field, tag| {
        match field {
            DeploymentRepositoryField::UniqueVersion => b.unique_version = de.flag(tag, true)?,
            DeploymentRepositoryField::Releases => b.releases = de.entity(tag)?,
            DeploymentRepositoryField::Snapshots => b.snapshots = de.entity(tag)?,
            DeploymentRepositoryField::Id => b.id = de.string(tag)?,
            DeploymentRepositoryField::Name => b.name = de.string(tag)?,
            DeploymentRepositoryField::Url => b.url = de.string(tag)?,
            DeploymentRepositoryField::Layout => b.layout = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Site, "site", |de, b, start| {
    b.locations = de.read_fields(start, SITE, |de, field, tag| {
        match field {
            SiteField::Id => b.id = de.string(tag)?,
            SiteField::Name => b.name = de.string(tag)?,
            SiteField::Url => b.url = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Relocation, "relocation", |de, b, start| {
    b.locations = de.read_fields(start, RELOCATION, |de, field, tag| {
        match field {
            RelocationField::GroupId => b.group_id = de.string(tag)?,
            RelocationField::ArtifactId => b.artifact_id = de.string(tag)?,
            RelocationField::Version => b.version = de.string(tag)?,
            RelocationField::Message => b.message = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Repository, "repository", |de, b, start| {
    b.locations = de.read_fields(start, REPOSITORY, |de, field, tag| {
        match field {
            RepositoryField::Releases => b.releases = de.entity(tag)?,
            RepositoryField::Snapshots => b.snapshots = de.entity(tag)?,
            RepositoryField::Id => b.id = de.string(tag)?,
            RepositoryField::Name => b.name = de.string(tag)?,
            RepositoryField::Url => b.url = de.string(tag)?,
            RepositoryField::Layout => b.layout = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(RepositoryBase, "repositoryBase", |de, b, start| {
    b.locations = de.read_fields(start, REPOSITORY_BASE, |de, field, tag| {
        match field {
            RepositoryBaseField::Id => b.id = de.string(tag)?,
            RepositoryBaseField::Name => b.name = de.string(tag)?,
            RepositoryBaseField::Url => b.url = de.string(tag)?,
            RepositoryBaseField::Layout => b.layout = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(RepositoryPolicy, "repositoryPolicy", |de, b, start| {
    b.locations = de.read_fields(start, REPOSITORY_POLICY, |de, field, tag| {
        match field {
            RepositoryPolicyField::Enabled => b.enabled = de.string(tag)?,
            RepositoryPolicyField::UpdatePolicy => b.update_policy = de.string(tag)?,
            RepositoryPolicyField::ChecksumPolicy => b.checksum_policy = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(DependencyManagement, "dependencyManagement", |de, b, start| {
    b.locations = de.read_fields(start, DEPENDENCY_MANAGEMENT, |de, field, tag| {
        match field {
            DependencyManagementField::Dependencies => {
                b.dependencies = de.list(tag, "dependency")?
            }
        }
        Ok(())
    })?;
});

production!(Dependency, "dependency", |de, b, start| {
    b.locations = de.read_fields(start, DEPENDENCY, |de, field, tag| {
        match field {
            DependencyField::GroupId => b.group_id = de.string(tag)?,
            DependencyField::ArtifactId => b.artifact_id = de.string(tag)?,
            DependencyField::Version => b.version = de.string(tag)?,
            DependencyField::Type => b.type_ = de.string(tag)?,
            DependencyField::Classifier => b.classifier = de.string(tag)?,
            DependencyField::Scope => b.scope = de.string(tag)?,
            DependencyField::SystemPath => b.system_path = de.string(tag)?,
            DependencyField::Exclusions => b.exclusions = de.list(tag, "exclusion")?,
            DependencyField::Optional => b.optional = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Exclusion, "exclusion", |de, b, start| {
    b.locations = de.read_fields(start, EXCLUSION, |de, field, tag| {
        match field {
            ExclusionField::GroupId => b.group_id = de.string(tag)?,
            ExclusionField::ArtifactId => b.artifact_id = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Build, "build", |de, b, start| {
    b.locations = de.read_fields(start, BUILD, |de, field, tag| {
        match field {
            BuildField::SourceDirectory => b.source_directory = de.string(tag)?,
            BuildField::ScriptSourceDirectory => b.script_source_directory = de.string(tag)?,
            BuildField::TestSourceDirectory => b.test_source_directory = de.string(tag)?,
            BuildField::OutputDirectory => b.output_directory = de.string(tag)?,
            BuildField::TestOutputDirectory => b.test_output_directory = de.string(tag)?,
            BuildField::Extensions => b.extensions = de.list(tag, "extension")?,
            BuildField::DefaultGoal => b.default_goal = de.string(tag)?,
            BuildField::Resources => b.resources = de.list(tag, "resource")?,
            BuildField::TestResources => b.test_resources = de.list(tag, "testResource")?,
            BuildField::Directory => b.directory = de.string(tag)?,
            BuildField::FinalName => b.final_name = de.string(tag)?,
            BuildField::Filters => b.filters = de.strings(tag, "filter")?,
            BuildField::PluginManagement => b.plugin_management = de.entity(tag)?,
            BuildField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(BuildBase, "build", |de, b, start| {
    b.locations = de.read_fields(start, BUILD_BASE, |de, field, tag| {
        match field {
            BuildBaseField::DefaultGoal => b.default_goal = de.string(tag)?,
            BuildBaseField::Resources => b.resources = de.list(tag, "resource")?,
            BuildBaseField::TestResources => b.test_resources = de.list(tag, "testResource")?,
            BuildBaseField::Directory => b.directory = de.string(tag)?,
            BuildBaseField::FinalName => b.final_name = de.string(tag)?,
            BuildBaseField::Filters => b.filters = de.strings(tag, "filter")?,
            BuildBaseField::PluginManagement => b.plugin_management = de.entity(tag)?,
            BuildBaseField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(Extension, "extension", |de, b, start| {
    b.locations = de.read_fields(start, EXTENSION, |de, field, tag| {
        match field {
            ExtensionField::GroupId => b.group_id = de.string(tag)?,
            ExtensionField::ArtifactId => b.artifact_id = de.string(tag)?,
            ExtensionField::Version => b.version = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(Resource, "resource", |de, b, start| {
    b.locations = de.read_fields(start, RESOURCE, |de, field, tag| {
        match field {
            ResourceField::TargetPath => b.target_path = de.string(tag)?,
            ResourceField::Filtering => b.filtering = de.string(tag)?,
            ResourceField::Directory => b.directory = de.string(tag)?,
            ResourceField::Includes => b.includes = de.strings(tag, "include")?,
            ResourceField::Excludes => b.excludes = de.strings(tag, "exclude")?,
        }
        Ok(())
    })?;
});

production!(FileSet, "fileSet", |de, b, start| {
    b.locations = de.read_fields(start, FILE_SET, |de, field, tag| {
        match field {
            FileSetField::Directory => b.directory = de.string(tag)?,
            FileSetField::Includes => b.includes = de.strings(tag, "include")?,
            FileSetField::Excludes => b.excludes = de.strings(tag, "exclude")?,
        }
        Ok(())
    })?;
});

production!(PatternSet, "patternSet", |de, b, start| {
    b.locations = de.read_fields(start, PATTERN_SET, |de, field, tag| {
        match field {
            PatternSetField::Includes => b.includes = de.strings(tag, "include")?,
            PatternSetField::Excludes => b.excludes = de.strings(tag, "exclude")?,
        }
        Ok(())
    })?;
});

production!(PluginManagement, "pluginManagement", |de, b, start| {
    b.locations = de.read_fields(start, PLUGIN_CONTAINER, |de, field, tag| {
        match field {
            PluginContainerField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(PluginContainer, "pluginContainer", |de, b, start| {
    b.locations = de.read_fields(start, PLUGIN_CONTAINER, |de, field, tag| {
        match field {
            PluginContainerField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(PluginConfiguration, "pluginConfiguration", |de, b, start| {
    b.locations = de.read_fields(start, PLUGIN_CONFIGURATION, |de, field, tag| {
        match field {
            PluginConfigurationField::PluginManagement => b.plugin_management = de.entity(tag)?,
            PluginConfigurationField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(Plugin, "plugin", |de, b, start| {
    b.locations = de.read_fields(start, PLUGIN, |de, field, tag| {
        match field {
            PluginField::GroupId => b.group_id = de.string(tag)?,
            PluginField::ArtifactId => b.artifact_id = de.string(tag)?,
            PluginField::Version => b.version = de.string(tag)?,
            PluginField::Extensions => b.extensions = de.string(tag)?,
            PluginField::Executions => b.executions = de.list(tag, "execution")?,
            PluginField::Dependencies => b.dependencies = de.list(tag, "dependency")?,
            PluginField::Goals => b.goals = de.dom(tag)?,
            PluginField::Inherited => b.inherited = de.string(tag)?,
            PluginField::Configuration => b.configuration = de.dom(tag)?,
        }
        Ok(())
    })?;
});

production!(PluginExecution, "execution", |de, b, start| {
    b.locations = de.read_fields(start, PLUGIN_EXECUTION, |de, field, tag| {
        match field {
            PluginExecutionField::Id => b.id = de.string(tag)?,
            PluginExecutionField::Phase => b.phase = de.string(tag)?,
            PluginExecutionField::Goals => b.goals = de.strings(tag, "goal")?,
            PluginExecutionField::Inherited => b.inherited = de.string(tag)?,
            PluginExecutionField::Configuration => b.configuration = de.dom(tag)?,
        }
        Ok(())
    })?;
});

production!(ConfigurationContainer, "configurationContainer", |de, b, start| {
    b.locations = de.read_fields(start, CONFIGURATION_CONTAINER, |de, field, tag| {
        match field {
            ConfigurationContainerField::Inherited => b.inherited = de.string(tag)?,
            ConfigurationContainerField::Configuration => b.configuration = de.dom(tag)?,
        }
        Ok(())
    })?;
});

production!(Reporting, "reporting", |de, b, start| {
    b.locations = de.read_fields(start, REPORTING, |de, field, tag| {
        match field {
            ReportingField::ExcludeDefaults => b.exclude_defaults = de.string(tag)?,
            ReportingField::OutputDirectory => b.output_directory = de.string(tag)?,
            ReportingField::Plugins => b.plugins = de.list(tag, "plugin")?,
        }
        Ok(())
    })?;
});

production!(ReportPlugin, "plugin", |de, b, start| {
    b.locations = de.read_fields(start, REPORT_PLUGIN, |de, field, tag| {
        match field {
            ReportPluginField::GroupId => b.group_id = de.string(tag)?,
            ReportPluginField::ArtifactId => b.artifact_id = de.string(tag)?,
            ReportPluginField::Version => b.version = de.string(tag)?,
            ReportPluginField::ReportSets => b.report_sets = de.list(tag, "reportSet")?,
            ReportPluginField::Inherited => b.inherited = de.string(tag)?,
            ReportPluginField::Configuration => b.configuration = de.dom(tag)?,
        }
        Ok(())
    })?;
});

production!(ReportSet, "reportSet", |de, b, start| {
    b.locations = de.read_fields(start, REPORT_SET, |de, field, tag| {
        match field {
            ReportSetField::Id => b.id = de.string(tag)?,
            ReportSetField::Reports => b.reports = de.strings(tag, "report")?,
            ReportSetField::Inherited => b.inherited = de.string(tag)?,
            ReportSetField::Configuration => b.configuration = de.dom(tag)?,
        }
        Ok(())
    })?;
});

production!(Profile, "profile", |de, b, start| {
    b.properties = Some(Properties::new());
    b.locations = de.read_fields(start, PROFILE, |de, field, tag| {
        match field {
            ProfileField::Id => b.id = de.string(tag)?,
            ProfileField::Activation => b.activation = de.entity(tag)?,
            ProfileField::Build => b.build = de.entity(tag)?,
            ProfileField::Modules => b.modules = de.strings(tag, "module")?,
            ProfileField::DistributionManagement => b.distribution_management = de.entity(tag)?,
            ProfileField::Properties => b.properties = de.properties(tag)?,
            ProfileField::DependencyManagement => b.dependency_management = de.entity(tag)?,
            ProfileField::Dependencies => b.dependencies = de.list(tag, "dependency")?,
            ProfileField::Repositories => b.repositories = de.list(tag, "repository")?,
            ProfileField::PluginRepositories => {
                b.plugin_repositories = de.list(tag, "pluginRepository")?
            }
            ProfileField::Reports => b.reports = de.dom(tag)?,
            ProfileField::Reporting => b.reporting = de.entity(tag)?,
        }
        Ok(())
    })?;
});

production!(Activation, "activation", |de, b, start| {
    b.locations = de.read_fields(start, ACTIVATION, |de, field, tag| {
        match field {
            ActivationField::ActiveByDefault => b.active_by_default = de.flag(tag, false)?,
            ActivationField::Jdk => b.jdk = de.string(tag)?,
            ActivationField::Os => b.os = de.entity(tag)?,
            ActivationField::Property => b.property = de.entity(tag)?,
            ActivationField::File => b.file = de.entity(tag)?,
        }
        Ok(())
    })?;
});

production!(ActivationOs, "os", |de, b, start| {
    b.locations = de.read_fields(start, ACTIVATION_OS, |de, field, tag| {
        match field {
            ActivationOsField::Name => b.name = de.string(tag)?,
            ActivationOsField::Family => b.family = de.string(tag)?,
            ActivationOsField::Arch => b.arch = de.string(tag)?,
            ActivationOsField::Version => b.version = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(ActivationProperty, "property", |de, b, start| {
    b.locations = de.read_fields(start, ACTIVATION_PROPERTY, |de, field, tag| {
        match field {
            ActivationPropertyField::Name => b.name = de.string(tag)?,
            ActivationPropertyField::Value => b.value = de.string(tag)?,
        }
        Ok(())
    })?;
});

production!(ActivationFile, "file", |de, b, start| {
    b.locations = de.read_fields(start, ACTIVATION_FILE, |de, field, tag| {
        match field {
            ActivationFileField::Missing => b.missing = de.string(tag)?,
            ActivationFileField::Exists => b.exists = de.string(tag)?,
        }
        Ok(())
    })?;
});
