use super::*;
use approx::assert_relative_eq;

#[test]
fn test_kind_forward_shapes() -> Result<(), GradNodeError> {
    let x = [1.0f64, 2.0, 3.0];
    assert_eq!(OpKind::Sum.forward(&x)?, NodeValue::Scalar(6.0));
    assert_eq!(OpKind::Product.forward(&x)?, NodeValue::Scalar(6.0));

    let exp = OpKind::Exp.forward(&x)?;
    assert_eq!(exp.len(), 3);
    assert!(exp.as_scalar().is_none());
    let values = exp.as_vector().expect("exp should produce a vector");
    assert_relative_eq!(values[0], std::f64::consts::E, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_kind_backward_matches_direct_ops() -> Result<(), GradNodeError> {
    let x = [0.5f32, -2.0, 4.0];
    assert_eq!(OpKind::Sum.backward(&x)?, SumOp.backward(&x)?);
    assert_eq!(OpKind::Product.backward(&x)?, ProductOp.backward(&x)?);
    assert_eq!(OpKind::Exp.backward(&x)?, ExpOp.backward(&x)?);
    Ok(())
}

#[test]
fn test_kind_empty_input_uniform() {
    for kind in OpKind::ALL {
        let forward = kind.forward::<f64>(&[]);
        assert!(
            matches!(forward, Err(GradNodeError::InvalidInput { .. })),
            "{} forward should reject empty input, got {:?}",
            kind,
            forward
        );
        let backward = kind.backward::<f64>(&[]);
        assert!(matches!(backward, Err(GradNodeError::InvalidInput { .. })));

        // Empty input wins over any upstream-gradient mismatch.
        let upstream = if kind.is_reduction() {
            NodeValue::Scalar(1.0f64)
        } else {
            NodeValue::Vector(vec![1.0f64])
        };
        let backward_with = kind.backward_with(&[], &upstream);
        assert!(
            matches!(backward_with, Err(GradNodeError::InvalidInput { .. })),
            "{} backward_with should reject empty input, got {:?}",
            kind,
            backward_with
        );
    }
}

#[test]
fn test_kind_backward_with() -> Result<(), GradNodeError> {
    let x = [2.0f64, 3.0];
    assert_eq!(
        OpKind::Product.backward_with(&x, &NodeValue::Scalar(2.0))?,
        vec![6.0, 4.0]
    );
    assert_eq!(
        OpKind::Sum.backward_with(&x, &NodeValue::Scalar(-1.0))?,
        vec![-1.0, -1.0]
    );
    let exp = OpKind::Exp.backward_with(&[0.0f64], &NodeValue::Vector(vec![3.0]))?;
    assert_relative_eq!(exp[0], 3.0);
    Ok(())
}

#[test]
fn test_kind_backward_with_wrong_upstream_kind() {
    let result = OpKind::Sum.backward_with(&[1.0f64], &NodeValue::Vector(vec![1.0]));
    match result {
        Err(GradNodeError::InvalidInput { operation, reason }) => {
            assert_eq!(operation, "sum");
            assert!(reason.contains("scalar"));
        }
        other => panic!("Expected InvalidInput, got {:?}", other),
    }

    let result = OpKind::Exp.backward_with(&[1.0f64], &NodeValue::Scalar(1.0));
    assert!(matches!(result, Err(GradNodeError::InvalidInput { .. })));
}

#[test]
fn test_kind_display_and_parse() -> Result<(), GradNodeError> {
    for kind in OpKind::ALL {
        let parsed: OpKind = kind.to_string().parse()?;
        assert_eq!(parsed, kind);
    }
    assert_eq!("MUL".parse::<OpKind>()?, OpKind::Product);
    assert_eq!(" Exp ".parse::<OpKind>()?, OpKind::Exp);
    Ok(())
}

#[test]
fn test_kind_parse_unknown() {
    assert_eq!(
        "dot".parse::<OpKind>(),
        Err(GradNodeError::UnknownOp("dot".to_string()))
    );
}

#[test]
fn test_kind_is_reduction() {
    assert!(OpKind::Sum.is_reduction());
    assert!(OpKind::Product.is_reduction());
    assert!(!OpKind::Exp.is_reduction());
}
