use crate::{
    model::{Model, Status},
    uid::{self, Validation, JSON_FILENAME, TEMPLATE},
};

pub fn validate(model: &mut Model) {
    model.status = match uid::validate(&model.editor.content()) {
        Validation::Ok => Some(Status::Information("Validation OK".to_string())),
        Validation::Invalid(reason) => Some(Status::Error(format!("Invalid: {}", reason))),
    };
}

pub fn insert_template(model: &mut Model) {
    model.editor.set_content(TEMPLATE);
}

#[tracing::instrument(skip(model))]
pub fn export_as_json(model: &mut Model) {
    match uid::to_json(&model.editor.content()) {
        Ok(json) => {
            model.editor.set_content(&json);
            model.filename = JSON_FILENAME.to_string();
            model.status = Some(Status::Information("Converted to JSON format".to_string()));
        }
        // serializing string slices does not fail, the model stays untouched
        Err(error) => tracing::error!("json serialization failed: {:?}", error),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{Model, Status},
        uid::{DIGITS_REASON, EMPTY_REASON, JSON_FILENAME, TEMPLATE},
    };

    #[test]
    fn validate_reports_ok() {
        let mut model = Model::default();
        model.editor.set_content(" 123 \n");

        super::validate(&mut model);

        assert_eq!(
            model.status,
            Some(Status::Information("Validation OK".to_string()))
        );
    }

    #[test]
    fn validate_reports_reason() {
        let mut model = Model::default();

        super::validate(&mut model);
        assert_eq!(
            model.status,
            Some(Status::Error(format!("Invalid: {}", EMPTY_REASON)))
        );

        model.editor.set_content("1\n2");
        super::validate(&mut model);
        assert_eq!(
            model.status,
            Some(Status::Error(format!("Invalid: {}", DIGITS_REASON)))
        );
    }

    #[test]
    fn validate_does_not_touch_buffer() {
        let mut model = Model::default();
        model.editor.set_content("abc");

        super::validate(&mut model);

        assert_eq!(model.editor.content(), "abc");
    }

    #[test]
    fn insert_template_keeps_status_and_filename() {
        let mut model = Model::default();
        model.filename = "mine.txt".to_string();
        model.status = Some(Status::Information("Validation OK".to_string()));

        super::insert_template(&mut model);

        assert_eq!(model.editor.content(), TEMPLATE);
        assert_eq!(model.filename, "mine.txt");
        assert_eq!(
            model.status,
            Some(Status::Information("Validation OK".to_string()))
        );
    }

    #[test]
    fn export_as_json_replaces_buffer_and_filename() {
        let mut model = Model::default();
        model.editor.set_content("1\n\n2\n");

        super::export_as_json(&mut model);

        assert_eq!(
            model.editor.content(),
            "{\n  \"uids\": [\n    \"1\",\n    \"2\"\n  ]\n}"
        );
        assert_eq!(model.filename, JSON_FILENAME);
        assert_eq!(
            model.status,
            Some(Status::Information("Converted to JSON format".to_string()))
        );
    }

    #[test]
    fn export_template_drops_nothing_but_blank_lines() {
        let mut model = Model::default();
        model.editor.set_content(TEMPLATE);

        super::export_as_json(&mut model);

        let value: serde_json::Value =
            serde_json::from_str(&model.editor.content()).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!({ "uids": ["123456789", "# multiple UIDs allowed line by line"] })
        );
    }
}
