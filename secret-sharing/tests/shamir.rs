use rand_core::OsRng;

use secret_sharing::{
    config::Config,
    poly::Point,
    shamir::{generate, Player, Scheme, ShareSet},
    Error,
};

#[test]
fn test_discard_different_pairs() {
    let field = Config::mersenne(31).unwrap().field().unwrap();
    let secret = field.element_from_u64(7);
    let player = Player::new(3);

    let shares = ShareSet::new(generate(secret.clone(), 5, 3, &mut OsRng).unwrap());

    for discarded in [[0, 1], [3, 4], [1, 3]] {
        let mut survivors = shares.clone();
        for id in discarded {
            assert!(survivors.remove(id).is_some());
        }
        assert_eq!(survivors.len(), 3);

        let reconstructed = player.reconstruct_secret(&survivors.shares()).unwrap();
        assert_eq!(reconstructed, secret);
    }
}

#[test]
fn test_default_field() {
    let scheme = Scheme::new(&Config::default(), 3, 5).unwrap();
    let secret = b"correct horse battery staple";

    let mut shares = scheme.split(secret, &mut OsRng).unwrap();
    shares.discard_random(2, &mut OsRng);
    assert_eq!(scheme.recover(&shares.shares()).unwrap(), secret);

    shares.discard_random(1, &mut OsRng);
    assert_eq!(
        scheme.recover(&shares.shares()).unwrap_err(),
        Error::InsufficientShares
    );
}

#[test]
fn test_shares_as_integers() {
    let scheme = Scheme::new(&Config::mersenne(127).unwrap(), 2, 4).unwrap();
    let field = scheme.field().clone();
    let shares = scheme.split(b"xyz", &mut OsRng).unwrap();

    // Hand the shares out as plain integers and bring two of them back.
    let exported: Vec<_> = shares.iter().map(|(_, s)| s.to_biguints()).collect();
    let imported: Vec<_> = exported[2..]
        .iter()
        .map(|(x, y)| Point::from_biguints(&field, x.clone(), y.clone()).unwrap())
        .collect();

    assert_eq!(scheme.recover(&imported).unwrap(), b"xyz");
}
