use pom_reader::{
    dom, from_reader, from_slice, from_str, from_str_with_options, Dependency, Error, Identity,
    InputLocation, Model, ModelReader, Plugin, ReaderOptions,
};
use std::collections::HashSet;
use std::io::Cursor;

const FULL_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>

  <parent>
    <groupId>org.example</groupId>
    <artifactId>example-parent</artifactId>
    <version>7</version>
    <relativePath/>
  </parent>

  <artifactId>example-core</artifactId>
  <version>1.2.0-SNAPSHOT</version>
  <packaging>jar</packaging>
  <name>Example Core</name>
  <description>
    Core library of the example project.
  </description>
  <url>https://example.org/core</url>
  <inceptionYear>2019</inceptionYear>

  <organization>
    <name>Example Org</name>
    <url>https://example.org</url>
  </organization>

  <licenses>
    <license>
      <name>Apache-2.0</name>
      <url>https://www.apache.org/licenses/LICENSE-2.0.txt</url>
      <distribution>repo</distribution>
    </license>
  </licenses>

  <developers>
    <developer>
      <id>jdoe</id>
      <name>J. Doe</name>
      <email>jdoe@example.org</email>
      <roles>
        <role>lead</role>
        <role>developer</role>
      </roles>
      <timezone>+1</timezone>
    </developer>
  </developers>

  <mailingLists>
    <mailingList>
      <name>users</name>
      <post>users@example.org</post>
      <otherArchives>
        <otherArchive>https://lists.example.org/users</otherArchive>
      </otherArchives>
    </mailingList>
  </mailingLists>

  <prerequisites>
    <maven>3.6.3</maven>
  </prerequisites>

  <scm>
    <connection>scm:git:https://example.org/core.git</connection>
    <tag>HEAD</tag>
  </scm>

  <issueManagement>
    <system>GitHub</system>
    <url>https://example.org/core/issues</url>
  </issueManagement>

  <ciManagement>
    <system>ci</system>
    <notifiers>
      <notifier>
        <type>mail</type>
        <sendOnSuccess>false</sendOnSuccess>
        <sendOnWarning></sendOnWarning>
        <configuration>
          <address>ci@example.org</address>
        </configuration>
      </notifier>
    </notifiers>
  </ciManagement>

  <distributionManagement>
    <repository>
      <uniqueVersion>false</uniqueVersion>
      <id>releases</id>
      <url>https://repo.example.org/releases</url>
    </repository>
    <snapshotRepository>
      <id>snapshots</id>
      <url>https://repo.example.org/snapshots</url>
    </snapshotRepository>
    <site>
      <id>site</id>
      <url>scp://example.org/site</url>
    </site>
  </distributionManagement>

  <properties>
    <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
    <maven.compiler.release>17</maven.compiler.release>
  </properties>

  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>org.example</groupId>
        <artifactId>example-bom</artifactId>
        <version>2.0</version>
        <type>pom</type>
        <scope>import</scope>
      </dependency>
    </dependencies>
  </dependencyManagement>

  <dependencies>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
    </dependency>
    <dependency>
      <groupId>org.junit.jupiter</groupId>
      <artifactId>junit-jupiter</artifactId>
      <scope>test</scope>
      <exclusions>
        <exclusion>
          <groupId>org.hamcrest</groupId>
          <artifactId>*</artifactId>
        </exclusion>
      </exclusions>
      <optional>true</optional>
    </dependency>
  </dependencies>

  <repositories>
    <repository>
      <id>central</id>
      <url>https://repo.maven.apache.org/maven2</url>
      <snapshots>
        <enabled>false</enabled>
      </snapshots>
    </repository>
  </repositories>

  <pluginRepositories>
    <pluginRepository>
      <id>plugins</id>
      <url>https://plugins.example.org</url>
    </pluginRepository>
  </pluginRepositories>

  <build>
    <extensions>
      <extension>
        <groupId>kr.motd.maven</groupId>
        <artifactId>os-maven-plugin</artifactId>
        <version>1.7.1</version>
      </extension>
    </extensions>
    <resources>
      <resource>
        <directory>src/main/resources</directory>
        <filtering>true</filtering>
        <includes>
          <include>**/*.properties</include>
        </includes>
      </resource>
    </resources>
    <testResources>
      <testResource>
        <directory>src/test/resources</directory>
      </testResource>
    </testResources>
    <finalName>core</finalName>
    <pluginManagement>
      <plugins>
        <plugin>
          <artifactId>maven-surefire-plugin</artifactId>
          <version>3.2.5</version>
        </plugin>
      </plugins>
    </pluginManagement>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-compiler-plugin</artifactId>
        <version>3.13.0</version>
        <configuration>
          <release>17</release>
          <compilerArgs>
            <arg>-Xlint:all</arg>
            <arg>-Werror</arg>
          </compilerArgs>
        </configuration>
      </plugin>
      <plugin>
        <artifactId>maven-jar-plugin</artifactId>
        <executions>
          <execution>
            <id>test-jar</id>
            <phase>package</phase>
            <goals>
              <goal>test-jar</goal>
            </goals>
          </execution>
        </executions>
      </plugin>
    </plugins>
  </build>

  <reporting>
    <plugins>
      <plugin>
        <artifactId>maven-javadoc-plugin</artifactId>
        <reportSets>
          <reportSet>
            <id>default</id>
            <reports>
              <report>javadoc</report>
            </reports>
          </reportSet>
        </reportSets>
      </plugin>
    </plugins>
  </reporting>

  <profiles>
    <profile>
      <id>release</id>
      <activation>
        <activeByDefault>false</activeByDefault>
        <jdk>[17,)</jdk>
        <os>
          <family>unix</family>
        </os>
        <property>
          <name>performRelease</name>
          <value>true</value>
        </property>
        <file>
          <exists>release.properties</exists>
        </file>
      </activation>
      <build>
        <plugins>
          <plugin>
            <artifactId>maven-gpg-plugin</artifactId>
          </plugin>
        </plugins>
      </build>
    </profile>
  </profiles>
</project>
"#;

fn text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str)
}

#[test]
fn test_full_descriptor() {
    let model = from_str(FULL_POM).unwrap();

    assert_eq!(text(model.model_version()), Some("4.0.0"));
    assert_eq!(text(model.group_id()), None);
    assert_eq!(text(model.artifact_id()), Some("example-core"));
    assert_eq!(text(model.description()), Some("Core library of the example project."));
    assert_eq!(text(model.model_encoding()), Some("UTF-8"));

    let parent = model.parent().unwrap();
    assert_eq!(text(parent.version()), Some("7"));
    assert_eq!(text(parent.relative_path()), Some(""));

    let organization = model.organization().unwrap();
    assert_eq!(text(organization.name()), Some("Example Org"));

    let developer = &model.developers().unwrap()[0];
    assert_eq!(developer.roles(), Some(&vec!["lead".to_string(), "developer".to_string()]));
    assert_eq!(model.contributors(), None);

    let mailing_list = &model.mailing_lists().unwrap()[0];
    assert_eq!(mailing_list.other_archives().map(Vec::len), Some(1));

    let notifier = &model.ci_management().unwrap().notifiers().unwrap()[0];
    assert_eq!(text(notifier.type_()), Some("mail"));
    assert_eq!(notifier.send_on_success(), Some(&false));
    assert_eq!(notifier.send_on_warning(), Some(&true));
    assert_eq!(notifier.send_on_error(), None);
    assert_eq!(
        notifier.configuration().and_then(|c| c.get("address")),
        Some("ci@example.org")
    );

    let distribution = model.distribution_management().unwrap();
    assert_eq!(distribution.repository().unwrap().unique_version(), Some(&false));
    assert_eq!(distribution.snapshot_repository().unwrap().unique_version(), None);
    assert_eq!(text(distribution.site().unwrap().id()), Some("site"));

    let properties = model.properties().unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get("maven.compiler.release"), Some("17"));

    let managed = &model.dependency_management().unwrap().dependencies().unwrap()[0];
    assert_eq!(text(managed.scope()), Some("import"));

    let dependencies = model.dependencies().unwrap();
    assert_eq!(dependencies.len(), 2);
    assert_eq!(text(dependencies[0].artifact_id()), Some("slf4j-api"));
    assert_eq!(dependencies[0].exclusions(), None);
    assert_eq!(text(dependencies[1].optional()), Some("true"));
    let exclusion = &dependencies[1].exclusions().unwrap()[0];
    assert_eq!(text(exclusion.artifact_id()), Some("*"));

    let repository = &model.repositories().unwrap()[0];
    assert_eq!(text(repository.snapshots().unwrap().enabled()), Some("false"));
    assert_eq!(repository.releases(), None);
    assert_eq!(text(model.plugin_repositories().unwrap()[0].id()), Some("plugins"));

    let build = model.build().unwrap();
    assert_eq!(text(build.extensions().unwrap()[0].version()), Some("1.7.1"));
    assert_eq!(
        build.resources().unwrap()[0].includes(),
        Some(&vec!["**/*.properties".to_string()])
    );
    assert_eq!(text(build.test_resources().unwrap()[0].directory()), Some("src/test/resources"));
    let managed_plugin = &build.plugin_management().unwrap().plugins().unwrap()[0];
    assert_eq!(text(managed_plugin.version()), Some("3.2.5"));

    let plugins = build.plugins().unwrap();
    assert_eq!(
        plugins[0].configuration(),
        Some(&dom!(configuration {
            release: "17",
            compilerArgs { arg: "-Xlint:all", arg: "-Werror" },
        }))
    );
    let execution = &plugins[1].executions().unwrap()[0];
    assert_eq!(execution.goals(), Some(&vec!["test-jar".to_string()]));
    assert_eq!(text(execution.phase()), Some("package"));

    let report_plugin = &model.reporting().unwrap().plugins().unwrap()[0];
    let report_set = &report_plugin.report_sets().unwrap()[0];
    assert_eq!(report_set.reports(), Some(&vec!["javadoc".to_string()]));

    let profile = &model.profiles().unwrap()[0];
    let activation = profile.activation().unwrap();
    assert_eq!(activation.active_by_default(), Some(&false));
    assert_eq!(text(activation.os().unwrap().family()), Some("unix"));
    assert_eq!(text(activation.property().unwrap().value()), Some("true"));
    assert_eq!(text(activation.file().unwrap().exists()), Some("release.properties"));
    let profile_plugin = &profile.build().unwrap().plugins().unwrap()[0];
    assert_eq!(text(profile_plugin.artifact_id()), Some("maven-gpg-plugin"));
    assert_eq!(profile.properties().map(|p| p.is_empty()), Some(true));
}

#[test]
fn test_full_descriptor_is_lenient_clean() {
    let strict = from_str(FULL_POM).unwrap();
    let lenient = from_str_with_options(FULL_POM, ReaderOptions::lenient()).unwrap();
    assert_eq!(strict, lenient);
    assert_eq!(strict.identity(), lenient.identity());
}

#[test]
fn test_end_to_end_scenario() {
    let xml = "<project><groupId>g</groupId><artifactId>a</artifactId><version>1.0</version></project>";
    let model = from_str(xml).unwrap();

    let mut expected = Model::builder();
    expected.group_id = Some("g".to_string());
    expected.artifact_id = Some("a".to_string());
    expected.version = Some("1.0".to_string());
    assert_eq!(model, expected.build());

    let with_unknown =
        "<project><groupId>g</groupId><artifactId>a</artifactId><version>1.0</version><foo/></project>";
    let err = from_str(with_unknown).unwrap_err();
    assert!(matches!(err, Error::UnrecognisedTag { ref tag, .. } if tag == "foo"));
    assert_eq!(from_str_with_options(with_unknown, ReaderOptions::lenient()).unwrap(), model);
}

#[test]
fn test_duplicated_field() {
    let xml = "<project>\n  <groupId>first</groupId>\n  <groupId>second</groupId>\n</project>";

    let err = from_str(xml).unwrap_err();
    assert_eq!(err, Error::duplicated_tag(3, 12, "groupId"));
    assert_eq!(
        err.to_string(),
        "Duplicated tag: 'groupId' (position: line 3, column 12)"
    );

    let model = from_str_with_options(xml, ReaderOptions::lenient()).unwrap();
    assert_eq!(text(model.group_id()), Some("first"));
    assert_eq!(model.location("groupId"), Some(InputLocation { line: 2, column: 12 }));
}

#[test]
fn test_duplicated_list_wrapper() {
    let xml = r#"<project>
  <modules><module>a</module></modules>
  <modules><module>b</module></modules>
</project>"#;
    assert!(matches!(from_str(xml), Err(Error::DuplicatedTag { .. })));

    let model = from_str_with_options(xml, ReaderOptions::lenient()).unwrap();
    assert_eq!(model.modules(), Some(&vec!["a".to_string()]));
}

#[test]
fn test_repeated_list_items_are_not_duplicates() {
    let xml = "<project><modules><module>a</module><module>a</module></modules></project>";
    let model = from_str(xml).unwrap();
    assert_eq!(model.modules().map(Vec::len), Some(2));
}

#[test]
fn test_organisation_alias() {
    let canonical = from_str("<project><organization><name>O</name></organization></project>").unwrap();
    let legacy = from_str("<project><organisation><name>O</name></organisation></project>").unwrap();
    assert_eq!(canonical, legacy);
    assert!(canonical.organization().is_some());

    // Reported under the canonical name, whichever spelling came second
    for both in [
        "<project><organization/><organisation/></project>",
        "<project><organisation/><organization/></project>",
        "<project><organisation/><organisation/></project>",
    ] {
        assert!(matches!(
            from_str(both),
            Err(Error::DuplicatedTag { ref tag, .. }) if tag == "organization"
        ));
    }
}

#[test]
fn test_person_organisation_aliases() {
    let canonical = r#"<project><developers><developer>
        <organization>O</organization><organizationUrl>u</organizationUrl>
    </developer></developers></project>"#;
    let legacy = r#"<project><developers><developer>
        <organisation>O</organisation><organisationUrl>u</organisationUrl>
    </developer></developers></project>"#;
    let a = from_str(canonical).unwrap();
    let b = from_str(legacy).unwrap();
    assert_eq!(a.developers(), b.developers());

    let developer = &b.developers().unwrap()[0];
    assert_eq!(text(developer.organization()), Some("O"));
    assert_eq!(text(developer.organization_url()), Some("u"));

    let both = r#"<contributor><organizationUrl>u</organizationUrl><organisationUrl>v</organisationUrl></contributor>"#;
    let err = ModelReader::new()
        .read_entity::<pom_reader::Contributor>(both, true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Duplicated tag: 'organizationUrl' (position: line 1, column 67)"
    );
}

#[test]
fn test_absent_and_empty_lists_differ() {
    let absent = from_str("<project/>").unwrap();
    let empty = from_str("<project><dependencies/></project>").unwrap();
    let empty_pair = from_str("<project><dependencies></dependencies></project>").unwrap();

    assert_eq!(absent.dependencies(), None);
    assert_eq!(empty.dependencies(), Some(&Vec::<Dependency>::new()));
    assert_eq!(empty, empty_pair);
    assert_ne!(absent, empty);
}

#[test]
fn test_profile_properties_are_always_present() {
    let model = from_str("<project><profiles><profile><id>p</id></profile></profiles></project>").unwrap();
    let profile = &model.profiles().unwrap()[0];
    assert!(profile.properties().unwrap().is_empty());

    // The project itself keeps absent properties unset
    assert_eq!(model.properties(), None);
}

#[test]
fn test_contributor_blank_fields_are_unset() {
    let xml = r#"<project><contributors><contributor>
        <name> </name>
        <email>  </email>
        <organization></organization>
        <url/>
    </contributor></contributors></project>"#;
    let model = from_str(xml).unwrap();
    let contributor = &model.contributors().unwrap()[0];

    assert_eq!(text(contributor.name()), Some(""));
    assert_eq!(text(contributor.url()), Some(""));
    assert_eq!(contributor.email(), None);
    assert_eq!(contributor.organization(), None);
    // The blank element still counts as seen
    assert!(contributor.location("email").is_some());
}

#[test]
fn test_default_entities() {
    let xml = "<project><name>a&nbsp;b &copy; c &amp; d</name></project>";

    let model = from_str(xml).unwrap();
    assert_eq!(text(model.name()), Some("a\u{a0}b \u{a9} c & d"));

    let mut reader = ModelReader::new();
    reader.set_add_default_entities(false);
    assert!(matches!(reader.read_str(xml, true), Err(Error::Xml { .. })));
    assert!(matches!(reader.read_str(xml, false), Err(Error::Xml { .. })));

    let xml_only = reader.read_str("<project><name>&lt;&gt;&apos;&quot;</name></project>", true).unwrap();
    assert_eq!(text(xml_only.name()), Some("<>'\""));
}

#[test]
fn test_character_references() {
    let model = from_str("<project><name>&#65;&#x42;</name></project>").unwrap();
    assert_eq!(text(model.name()), Some("AB"));
}

#[test]
fn test_fragment_reading() {
    let reader = ModelReader::new();
    let plugin: Plugin = reader
        .read_entity(
            "<plugin><artifactId>maven-site-plugin</artifactId><goals><goal>site</goal></goals></plugin>",
            true,
        )
        .unwrap();
    assert_eq!(plugin.goals(), Some(&dom!(goals { goal: "site" })));

    let err = reader
        .read_entity::<Dependency>("<plugin/>", true)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::WrongRootElement { ref expected, ref found, .. } if expected == "dependency" && found == "plugin"
    ));
}

#[test]
fn test_nested_locations() {
    let xml = "<project>\n  <build>\n    <finalName>x</finalName>\n  </build>\n</project>";
    let model = from_str(xml).unwrap();
    assert_eq!(model.location("build"), Some(InputLocation { line: 2, column: 10 }));

    let build = model.build().unwrap();
    assert_eq!(build.location("finalName"), Some(InputLocation { line: 3, column: 16 }));
    assert_eq!(build.location("directory"), None);
}

#[test]
fn test_locations_do_not_affect_equality() {
    let compact = from_str("<project><groupId>g</groupId></project>").unwrap();
    let spread = from_str("<project>\n\n   <groupId>g</groupId>\n</project>").unwrap();

    assert_ne!(compact.location("groupId"), spread.location("groupId"));
    assert_eq!(compact, spread);
    assert_eq!(compact.identity(), spread.identity());

    let mut set = HashSet::new();
    set.insert(compact);
    assert!(set.contains(&spread));
}

#[test]
fn test_entry_points() {
    let bytes = FULL_POM.as_bytes();
    let a = from_slice(bytes).unwrap();
    let b = from_reader(Cursor::new(bytes)).unwrap();
    let c = from_str(FULL_POM).unwrap();
    assert_eq!(a, b);
    // The declaration names the encoding for text input too
    assert_eq!(a, c);
}

#[test]
fn test_malformed_xml() {
    let err = from_str("<project><groupId>g</artifactId></project>").unwrap_err();
    assert!(matches!(err, Error::Xml { .. }), "{:?}", err);
    assert!(err.position().is_some());
}

#[test]
fn test_unexpected_eof() {
    let err = from_str("<project><build><plugins>").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. } | Error::Xml { .. }), "{:?}", err);
}

#[test]
fn test_serialize_to_json() {
    let xml = r#"<project>
  <groupId>g</groupId>
  <dependencies>
    <dependency><artifactId>a</artifactId><type>pom</type></dependency>
  </dependencies>
  <properties><k>v</k></properties>
</project>"#;
    let model = from_str(xml).unwrap();
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "groupId": "g",
            "dependencies": [{ "artifactId": "a", "type": "pom" }],
            "properties": { "k": "v" }
        })
    );
}

fn deep_configuration(depth: usize) -> String {
    format!(
        "<project><build><plugins><plugin><configuration>{}v{}</configuration></plugin></plugins></build></project>",
        "<a>".repeat(depth),
        "</a>".repeat(depth)
    )
}

#[test]
fn test_deep_configuration_is_read_or_rejected_cleanly() {
    let model = from_str(&deep_configuration(200)).unwrap();
    let plugin = &model.build().unwrap().plugins().unwrap()[0];
    let mut node = plugin.configuration().unwrap();
    let mut depth = 0;
    while let Some(child) = node.child("a") {
        node = child;
        depth += 1;
    }
    assert_eq!(depth, 200);
    assert_eq!(node.value(), Some("v"));

    for depth in [1_000, 5_000, 100_000] {
        let xml = deep_configuration(depth);
        for options in [ReaderOptions::default(), ReaderOptions::lenient()] {
            let err = from_str_with_options(&xml, options).unwrap_err();
            assert!(matches!(err, Error::UnexpectedContent { .. }), "{:?}", err);
        }
    }
}
