use prop_proof::{config::Config, context::Context, reports::Report};

use std::{cell::RefCell, rc::Rc};

mod echo {
    use prop_proof::structures::notation::Notation;

    use super::*;

    #[test]
    fn formulas_in_order() {
        let mut the_context = Context::from_config(Config::default());

        let echoed: Rc<RefCell<Vec<String>>> = Rc::default();
        let callback_echoed = echoed.clone();
        the_context.set_callback_formula(Box::new(move |formula| {
            callback_echoed
                .borrow_mut()
                .push(formula.as_string(Notation::Prefix))
        }));

        let lines = b"(A>B)\n-(C.D)\nE\n";
        assert_eq!(the_context.echo(lines.as_slice()), Report::Success);
        assert_eq!(*echoed.borrow(), vec![">AB", "-.CD", "E"]);
    }

    #[test]
    fn blank_line_ends_input() {
        let mut the_context = Context::from_config(Config::default());

        let lines = b"A\n  \t\nB\n";
        assert_eq!(the_context.echo(lines.as_slice()), Report::Success);
        assert_eq!(the_context.counters.lines, 1);
    }

    #[test]
    fn continues_past_errors() {
        let mut the_context = Context::from_config(Config::default());

        let errors: Rc<RefCell<Vec<usize>>> = Rc::default();
        let callback_errors = errors.clone();
        the_context.set_callback_parse_error(Box::new(move |line, _| {
            callback_errors.borrow_mut().push(line)
        }));

        let lines = b"(A>?)\nA\n(A>B\nB\n";
        assert_eq!(the_context.echo(lines.as_slice()), Report::Failure);
        assert_eq!(the_context.counters.lines, 4);
        assert_eq!(the_context.counters.failures, 2);
        assert_eq!(*errors.borrow(), vec![1, 3]);
    }

    #[test]
    fn strict() {
        let mut config = Config::default();
        config.strict.value = true;
        let mut the_context = Context::from_config(config);

        let lines = b"A\n(A>?)\nB\n";
        assert_eq!(the_context.echo(lines.as_slice()), Report::Failure);
        assert_eq!(the_context.counters.lines, 2);
    }

    #[test]
    fn postfix_input() {
        let mut config = Config::default();
        config.notation.value = Notation::Postfix;
        let mut the_context = Context::from_config(config);

        let echoed: Rc<RefCell<Vec<String>>> = Rc::default();
        let callback_echoed = echoed.clone();
        the_context.set_callback_formula(Box::new(move |formula| {
            callback_echoed.borrow_mut().push(formula.to_string())
        }));

        let lines = b"A B > \nA-\n";
        assert_eq!(the_context.echo(lines.as_slice()), Report::Success);
        assert_eq!(*echoed.borrow(), vec!["(A>B)", "-A"]);
    }
}

mod axioms {
    use super::*;

    #[test]
    fn classification() {
        let mut the_context = Context::from_config(Config::default());

        let types: Rc<RefCell<Vec<Option<u32>>>> = Rc::default();
        let callback_types = types.clone();
        the_context.set_callback_axiom(Box::new(move |_, axiom_type| {
            callback_types.borrow_mut().push(axiom_type)
        }));

        let lines = b"(A>(B>A))
((-P>-Q)>(Q>P))
(A>(A+B))
((X=Y)>(Y>X))
";
        assert_eq!(the_context.check_axioms(lines.as_slice()), Report::Success);
        assert_eq!(*types.borrow(), vec![Some(1), Some(3), Some(7), Some(11)]);
        assert_eq!(the_context.counters.axioms, 4);
    }

    #[test]
    fn failures() {
        let mut the_context = Context::from_config(Config::default());

        let lines = b"(A>A)\n(A>\n(A>(B>A))\n";
        assert_eq!(the_context.check_axioms(lines.as_slice()), Report::Failure);
        assert_eq!(the_context.counters.lines, 3);
        assert_eq!(the_context.counters.axioms, 1);
        assert_eq!(the_context.counters.failures, 2);
    }

    #[test]
    fn strict() {
        let mut config = Config::default();
        config.strict.value = true;
        let mut the_context = Context::from_config(config);

        let lines = b"(A>(B>A))\n(A>A)\n(A>(B>A))\n";
        assert_eq!(the_context.check_axioms(lines.as_slice()), Report::Failure);
        assert_eq!(the_context.counters.lines, 2);
    }
}

mod compressed {
    use std::io::{BufReader, Write};

    use prop_proof::reports::ProofReport;

    use super::*;

    #[test]
    fn xz_proof() {
        let proof = b"A\n(A>B)\nA\n(A>B)\nB\n";

        let mut encoder = xz2::write::XzEncoder::new(Vec::default(), 6);
        assert!(encoder.write_all(proof).is_ok());
        let Ok(compressed) = encoder.finish() else {
            panic!("Failed to compress");
        };

        let reader = BufReader::new(xz2::read::XzDecoder::new(compressed.as_slice()));

        let mut config = Config::default();
        config.premises.value = 2;
        let mut the_context = Context::from_config(config);

        match the_context.prove(reader) {
            Ok(ProofReport::Verified(proof)) => assert_eq!(proof.len(), 3),
            _ => panic!("A valid proof"),
        }
    }
}
