use proptest::prelude::*;

use review_mlp::{Error, Matrix, Network};

fn matrix_strategy(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-100.0_f64..100.0, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    })
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in matrix_strategy(6)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn multiply_by_identity_is_a_no_op(m in matrix_strategy(6)) {
        let id = Matrix::identity(m.cols()).unwrap();
        prop_assert_eq!(Matrix::multiply(&m, &id).unwrap(), m);
    }

    #[test]
    fn subtract_self_is_zero(m in matrix_strategy(6)) {
        let z = Matrix::subtract(&m, &m).unwrap();
        prop_assert_eq!(z.shape(), m.shape());
        prop_assert!(z.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn multiply_rejects_inner_mismatch(
        a_rows in 1_usize..5,
        a_cols in 1_usize..5,
        b_rows in 1_usize..5,
        b_cols in 1_usize..5,
    ) {
        prop_assume!(a_cols != b_rows);
        let a = Matrix::new(a_rows, a_cols).unwrap();
        let b = Matrix::new(b_rows, b_cols).unwrap();
        let is_mismatch = matches!(
            Matrix::multiply(&a, &b),
            Err(Error::DimensionMismatch { op: "multiply", .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn multiply_shape_follows_outer_dims(
        rows in 1_usize..5,
        inner in 1_usize..5,
        cols in 1_usize..5,
    ) {
        let a = Matrix::new(rows, inner).unwrap();
        let b = Matrix::new(inner, cols).unwrap();
        let c = Matrix::multiply(&a, &b).unwrap();
        prop_assert_eq!((c.rows(), c.cols()), (rows, cols));
    }

    #[test]
    fn fresh_network_predicts_inside_open_unit_interval(
        input_nodes in 1_usize..8,
        hidden_nodes in 1_usize..256,
        output_nodes in 1_usize..6,
        seed in any::<u64>(),
        raw in prop::collection::vec(-1e6_f64..1e6, 8),
    ) {
        let net = Network::new_with_seed(input_nodes, hidden_nodes, output_nodes, seed).unwrap();
        let out = net.predict(&raw[..input_nodes]).unwrap();
        prop_assert_eq!(out.len(), output_nodes);
        prop_assert!(out.iter().all(|&y| y > 0.0 && y < 1.0), "{:?}", out);
    }

    #[test]
    fn training_preserves_parameter_shapes(
        seed in any::<u64>(),
        steps in prop::collection::vec(
            (prop::collection::vec(-1.0_f64..1.0, 3), prop::collection::vec(0.0_f64..1.0, 2)),
            1..20,
        ),
    ) {
        let mut net = Network::new_with_seed(3, 5, 2, seed).unwrap();
        let shapes = [
            net.weights_ih().shape(),
            net.weights_ho().shape(),
            net.bias_h().shape(),
            net.bias_o().shape(),
        ];
        for (x, t) in &steps {
            net.train(x, t).unwrap();
        }
        prop_assert_eq!(
            [
                net.weights_ih().shape(),
                net.weights_ho().shape(),
                net.bias_h().shape(),
                net.bias_o().shape(),
            ],
            shapes
        );
    }
}
