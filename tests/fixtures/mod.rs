//! Test fixtures
//!
//! Catalog documents shared by the integration tests.

#![allow(dead_code)]

/// The French catalog of the sample application
pub const FRENCH_CATALOG: &str = r#"{
    "version": "2.0",
    "language": "fr_FR",
    "contexts": [
        {
            "name": "Constant",
            "messages": [
                {"source": "Male", "translation": "Homme",
                 "locations": [{"filename": "../Model/example/Constant.cpp", "line": 4}]},
                {"source": "Female", "translation": "Femme",
                 "locations": [{"filename": "../Model/example/Constant.cpp", "line": 5}]}
            ]
        },
        {
            "name": "ElementType",
            "messages": [
                {"source": "Element", "translation": "Élément",
                 "locations": [{"filename": "../Model/example/ElementTypeFactoryMiniEMF.cpp", "line": 11}]},
                {"source": "Person", "translation": "Personne",
                 "locations": [{"filename": "../Model/example/ElementTypeFactoryMiniEMF.cpp", "line": 13}]},
                {"source": "Meeting", "translation": "Rendez-vous",
                 "locations": [{"filename": "../Model/example/ElementTypeFactoryMiniEMF.cpp", "line": 14}]}
            ]
        },
        {
            "name": "Property",
            "messages": [
                {"source": "Sex", "translation": "Sexe",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 17}]},
                {"source": "Age", "translation": "Âge",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 18}]},
                {"source": "Partner", "translation": "Partenaire",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 19}]},
                {"source": "Parents", "translation": "", "type": "unfinished",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 20}]},
                {"source": "Children", "translation": "Enfants", "type": "unfinished",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 21}]},
                {"source": "Meetings", "translation": "Rendez-vous",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 22}]},
                {"source": "Date and Time", "translation": "Date et Heure",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 25}]},
                {"source": "Participants", "translation": "", "type": "unfinished",
                 "locations": [{"filename": "../Model/example/PropertyFactoryMiniEMF.cpp", "line": 26}]}
            ]
        },
        {
            "name": "QObject",
            "messages": [
                {"source": " is a %1 year old %2", "translation": " est un %2 de %1 ans", "type": "unfinished",
                 "locations": [{"filename": "../Model/example/Person.cpp", "line": 54}]}
            ]
        }
    ]
}"#;

/// Minimal catalog where `Partner` has not been translated yet
pub const PARTNER_UNFINISHED: &str = r#"{
    "version": "2.1",
    "language": "fr_FR",
    "contexts": [
        {"name": "Constant", "messages": [{"source": "Male", "translation": "Homme"}]},
        {"name": "Property", "messages": [{"source": "Partner", "translation": "", "type": "unfinished"}]}
    ]
}"#;

/// German catalog used for locale switching
pub const GERMAN_CATALOG: &str = r#"{
    "version": "2.1",
    "language": "de_DE",
    "contexts": [
        {"name": "Constant", "messages": [
            {"source": "Male", "translation": "Mann"},
            {"source": "Female", "translation": "Frau"}
        ]}
    ]
}"#;

/// Plural messages for a Polish catalog
pub const POLISH_PLURALS: &str = r#"{
    "version": "2.1",
    "language": "pl_PL",
    "contexts": [
        {"name": "Calendar", "messages": [
            {"source": "%1 meeting(s)", "numerus": true,
             "translation": ["%1 spotkanie", "%1 spotkania", "%1 spotkań"]}
        ]}
    ]
}"#;

/// The same French messages as a TOML document
pub const FRENCH_TOML: &str = r#"
version = "2.1"
language = "fr_FR"

[[contexts]]
name = "Constant"

[[contexts.messages]]
source = "Male"
translation = "Homme"

[[contexts.messages]]
source = "Female"
translation = "Femme"
"#;

/// The French catalog of the sample application as Qt Linguist XML
pub const FRENCH_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="fr_FR">
<context>
    <name>Constant</name>
    <message>
        <location filename="../Model/example/Constant.cpp" line="4"/>
        <source>Male</source>
        <translation>Homme</translation>
    </message>
    <message>
        <location filename="../Model/example/Constant.cpp" line="5"/>
        <source>Female</source>
        <translation>Femme</translation>
    </message>
</context>
<context>
    <name>ElementType</name>
    <message>
        <location filename="../Model/example/ElementTypeFactoryMiniEMF.cpp" line="11"/>
        <source>Element</source>
        <translation>Élément</translation>
    </message>
    <message>
        <location filename="../Model/example/ElementTypeFactoryMiniEMF.cpp" line="13"/>
        <source>Person</source>
        <translation>Personne</translation>
    </message>
    <message>
        <location filename="../Model/example/ElementTypeFactoryMiniEMF.cpp" line="14"/>
        <source>Meeting</source>
        <translation>Rendez-vous</translation>
    </message>
</context>
<context>
    <name>Property</name>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="17"/>
        <source>Sex</source>
        <translation>Sexe</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="18"/>
        <source>Age</source>
        <translation>Âge</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="19"/>
        <source>Partner</source>
        <translation>Partenaire</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="20"/>
        <source>Parents</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="21"/>
        <source>Children</source>
        <translation type="unfinished">Enfants</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="22"/>
        <source>Meetings</source>
        <translation>Rendez-vous</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="25"/>
        <source>Date and Time</source>
        <translation>Date et Heure</translation>
    </message>
    <message>
        <location filename="../Model/example/PropertyFactoryMiniEMF.cpp" line="26"/>
        <source>Participants</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>QObject</name>
    <message>
        <location filename="../Model/example/Person.cpp" line="54"/>
        <source> is a %1 year old %2</source>
        <translation type="unfinished"> est un %2 de %1 ans</translation>
    </message>
</context>
</TS>
"#;
