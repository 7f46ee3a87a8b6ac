use schema2ts::{GenerationOptions, generate, schema2ts};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TypegenTest {
    pub schema: String,
    #[serde(default)]
    pub options: GenerationOptions,
    pub expected: String,
}

fn run_typegen_test(test_name: &str, test: &TypegenTest) {
    let output = schema2ts(&test.schema, &test.options);
    assert_eq!(
        output, test.expected,
        "{test_name}: generated types differ from fixture"
    );

    // a second run on the same input must not see state from the first
    assert_eq!(
        schema2ts(&test.schema, &test.options),
        output,
        "{test_name}: output is not stable across runs"
    );
}

macro_rules! typegen_test {
    ($test_name:ident, $yml_str:expr) => {
        #[test]
        fn $test_name() {
            let test: TypegenTest =
                serde_yaml::from_str($yml_str).expect("Failed to parse test YAML");
            run_typegen_test(stringify!($test_name), &test);
        }
    };
}

typegen_test!(
    test_basic_optional,
    include_str!("./fixtures/typegen/basic_optional.yml")
);

typegen_test!(
    test_basic_required,
    include_str!("./fixtures/typegen/basic_required.yml")
);

typegen_test!(
    test_ignore_keys,
    include_str!("./fixtures/typegen/ignore_keys.yml")
);

typegen_test!(test_comments, include_str!("./fixtures/typegen/comments.yml"));

typegen_test!(
    test_enum_disambiguation,
    include_str!("./fixtures/typegen/enum_disambiguation.yml")
);

typegen_test!(
    test_enum_suffix_collision,
    include_str!("./fixtures/typegen/enum_suffix_collision.yml")
);

typegen_test!(
    test_untyped_properties,
    include_str!("./fixtures/typegen/untyped_properties.yml")
);

typegen_test!(
    test_dedupe_shapes,
    include_str!("./fixtures/typegen/dedupe_shapes.yml")
);

typegen_test!(
    test_explain_and_prefixes,
    include_str!("./fixtures/typegen/explain_and_prefixes.yml")
);

static NESTED_SCHEMA: &str = r#"{
  "title": "Schema",
  "type": "object",
  "properties": {
    "firstName": { "type": "string" },
    "lastName": { "type": "string" },
    "age": { "type": "number" },
    "hairColor": {
      "type": "string",
      "enum": [
        { "title": "c1", "value": "color1" },
        { "title": "c2", "value": "color2" }
      ]
    },
    "arr": {
      "type": "array",
      "items": {
        "type": "object",
        "properties": {
          "arr1": { "type": "string" },
          "arr2": { "type": "number" },
          "arr3": {
            "type": "array",
            "items": {
              "type": "object",
              "properties": {
                "enen1": { "type": "string" },
                "enen2": { "type": "number" },
                "enen3": { "type": "boolean" }
              }
            }
          }
        }
      }
    }
  }
}"#;

#[test]
fn test_nested_arrays() {
    let output = schema2ts(NESTED_SCHEMA, &GenerationOptions::default());

    insta::assert_snapshot!(output.trim_end(), @r"
    export type THairColor = 'color1' | 'color2';

    export interface ISchema {
      firstName?: string;
      lastName?: string;
      age?: number;
      hairColor?: THairColor;
      arr?: IArr[];
    }

    export interface IArr {
      arr1?: string;
      arr2?: number;
      arr3?: IArr3[];
    }

    export interface IArr3 {
      enen1?: string;
      enen2?: number;
      enen3?: boolean;
    }
    ");
}

#[test]
fn test_enum_values_are_escaped() {
    let output = schema2ts(
        r#"{"type":"object","properties":{"quote":{"type":"string","enum":["it's","plain"]}}}"#,
        &GenerationOptions::default(),
    );

    insta::assert_snapshot!(output.trim_end(), @r"
    export type TQuote = 'it\'s' | 'plain';

    export interface ISchema {
      quote?: TQuote;
    }
    ");
}

#[test]
fn test_parse_failure() {
    let options = GenerationOptions::default();
    assert_eq!(
        schema2ts("not json", &options),
        options.parse_error_message
    );
    assert_eq!(schema2ts("[1, 2]", &options), options.parse_error_message);
}

#[test]
fn test_field_order_follows_property_order() {
    let output = schema2ts(
        r#"{"type":"object","properties":{"z":{"type":"string"},"a":{"type":"string"},"m":{"type":"string"}}}"#,
        &GenerationOptions::default(),
    );
    let z = output.find("z?:").unwrap();
    let a = output.find("a?:").unwrap();
    let m = output.find("m?:").unwrap();
    assert!(z < a && a < m);
}

#[test]
fn test_ignored_key_is_not_walked() {
    let res = generate(
        r#"{
            "type": "object",
            "properties": {
                "secret": {
                    "type": "object",
                    "properties": { "mode": { "type": "string", "enum": ["on"] } }
                },
                "name": { "type": "string" }
            }
        }"#,
        &GenerationOptions::default().with_ignore_keys(["secret"]),
    )
    .unwrap();

    assert_eq!(res.interfaces_generated, 1);
    assert_eq!(res.enums_generated, 0);
    assert!(!res.types.contains("ISecret"));
    assert!(res.types.contains("name?: string;"));
}

#[test]
fn test_semi_is_stripped_everywhere() {
    let options = GenerationOptions::default()
        .with_semi(false)
        .with_explain("// a; b");
    let output = schema2ts(
        r#"{"type":"object","properties":{"a":{"type":"string"}}}"#,
        &options,
    );
    assert_eq!(output, "// a b\nexport interface ISchema {\n  a?: string\n}\n");
}

#[test]
fn test_format_option_runs_formatter() {
    let options = GenerationOptions::default().with_format(true);
    let output = schema2ts(
        r#"{"type":"object","properties":{"a":{"type":"string"}}}"#,
        &options,
    );
    assert!(output.contains("export interface ISchema {"));
    assert!(output.contains("a?: string;"));
}
