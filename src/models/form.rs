use crate::models::{STATUS_PAID, STATUS_PENDING};
use serde::Deserialize;
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// 字段名 -> 错误信息列表
pub type FieldErrors = HashMap<String, Vec<String>>;

/// 发票表单草稿 (创建/更新共用, 缺失字段为 None)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceDraft {
    #[validate(required(message = "Please select a customer."))]
    pub customer_id: Option<String>,
    #[validate(
        required(message = "Please enter an amount greater than $0."),
        range(min = 1, message = "Please enter an amount greater than $0.")
    )]
    pub amount: Option<i64>,
    #[validate(
        required(message = "Please select an invoice status."),
        custom(function = validate_status, message = "Please select an invoice status.")
    )]
    pub status: Option<String>,
}

/// 校验通过后的表单值
#[derive(Debug, Clone)]
pub struct ValidInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status == STATUS_PENDING || status == STATUS_PAID {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_status"))
    }
}

/// 校验表单草稿, 失败时返回按字段分组的错误信息
pub fn parse_invoice_form(draft: &InvoiceDraft) -> Result<ValidInvoice, FieldErrors> {
    if let Err(errors) = draft.validate() {
        return Err(flatten_errors(&errors));
    }
    match (&draft.customer_id, draft.amount, &draft.status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(ValidInvoice {
            customer_id: customer_id.clone(),
            amount,
            status: status.clone(),
        }),
        // required 校验已拦截 None, 此分支仅为类型完备
        _ => Err(FieldErrors::new()),
    }
}

fn flatten_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        map.insert(field.to_string(), messages);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(customer_id: Option<&str>, amount: Option<i64>, status: Option<&str>) -> InvoiceDraft {
        InvoiceDraft {
            customer_id: customer_id.map(str::to_string),
            amount,
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let parsed = parse_invoice_form(&draft(Some("c1"), Some(1500), Some("paid")))
            .expect("draft should validate");
        assert_eq!(parsed.customer_id, "c1");
        assert_eq!(parsed.amount, 1500);
        assert_eq!(parsed.status, "paid");
    }

    #[test]
    fn missing_customer_reports_field_message() {
        let errors = parse_invoice_form(&draft(None, Some(100), Some("pending"))).unwrap_err();
        assert_eq!(
            errors.get("customer_id").map(Vec::as_slice),
            Some(&["Please select a customer.".to_string()][..])
        );
        assert!(!errors.contains_key("amount"));
        assert!(!errors.contains_key("status"));
    }

    #[test]
    fn zero_amount_rejected() {
        let errors = parse_invoice_form(&draft(Some("c1"), Some(0), Some("paid"))).unwrap_err();
        assert_eq!(
            errors.get("amount").map(Vec::as_slice),
            Some(&["Please enter an amount greater than $0.".to_string()][..])
        );
    }

    #[test]
    fn unknown_status_rejected() {
        let errors = parse_invoice_form(&draft(Some("c1"), Some(100), Some("overdue"))).unwrap_err();
        assert_eq!(
            errors.get("status").map(Vec::as_slice),
            Some(&["Please select an invoice status.".to_string()][..])
        );
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = parse_invoice_form(&draft(None, None, None)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("customer_id"));
        assert!(errors.contains_key("amount"));
        assert!(errors.contains_key("status"));
    }
}
