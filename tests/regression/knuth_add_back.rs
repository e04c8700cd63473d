use big_integer::BigInteger;

// Operands whose trial quotient digit overshoots and must be corrected by
// adding the divisor back into the partial remainder, with either limb width.
#[test]
fn test() {
    let cases = [
        (
            "12403686660959255358033885535949370279388730326574674044088546254625",
            "170141183539697394245951641309428056063",
            "72902317962689047007982616855",
            "67044886423691361791077412350157512760",
        ),
        (
            "678027074732114703756190367905995946767809389429387635257588755469842220363397598084445294085987",
            "3138550869154842019248797629807518040767460741887949799423",
            "216031889556308443492415585966541763041",
            "1163228337392050391613151262586368871755552622236549560644",
        ),
    ];
    for (a, b, q, r) in &cases {
        let a: BigInteger = a.parse().unwrap();
        let b: BigInteger = b.parse().unwrap();
        let (quotient, remainder) = a.div_rem(&b).unwrap();
        assert_eq!(quotient.to_string(), *q);
        assert_eq!(remainder.to_string(), *r);

        for (a, b) in &[(-&a, b.clone()), (a.clone(), -&b), (-&a, -&b)] {
            let (q, r) = a.div_rem(b).unwrap();
            assert_eq!(&q * b + &r, *a, "{} / {}", a, b);
            assert!(r.abs() < b.abs());
            assert!(r.is_zero() || r.sign() == a.sign());
        }
    }
}
