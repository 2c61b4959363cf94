//! Pedersen hash test vectors.

use hex_literal::hex;

/// `(a, b, H(a, b))`
pub const PEDERSEN_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        hex!("049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804"),
    ),
    (
        hex!("03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb"),
        hex!("0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a"),
        hex!("030e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        hex!("05bb9440e27889a364bcb678b1f679ecd1347acdedcbf36e83494f857cc58026"),
    ),
    (
        hex!("0800000000000011000000000000000000000000000000000000000000000000"),
        hex!("0800000000000011000000000000000000000000000000000000000000000000"),
        hex!("07258fccaf3371fad51b117471d9d888a1786c5694c3e6099160477b593a576e"),
    ),
    (
        hex!("0100000000000000000000000000000000000000000000000000000000000000"),
        hex!("00ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        hex!("004093db927509c6f9fe0c78b70e8f9b75d099424268832b33349a5edaad9eab"),
    ),
    (
        hex!("0242f0ca2345c54adba323b6a7e8163f080ef99d0443e73933298fb53eb19b07"),
        hex!("07a193927e41ff34bbce0cb8bf5bc289804d7fd5d91f9fc595844f3452fe5d68"),
        hex!("078f43a9274af92ab3788c6e040b66222ef5371432916996b9ee63d8d48ae8d6"),
    ),
    (
        hex!("06a42ac3fb6b0f04566addcb9b4e5d58facda3c6ae114c8d27bd3918df7f1998"),
        hex!("014ed17d2621a250b5c3cadb030b4292b33a9563e54c88b9ed9804bc99e735a8"),
        hex!("05cc60ff1dc89de82f4c7fde34ead4cb764d2420e8778d122c0a45826440b25e"),
    ),
    (
        hex!("05fc329b683a063ab816f3497d3c84e1ee2f5b306a35dcdab370074420a784f0"),
        hex!("051839c7752bbadecc5ab0f811272b116fe3c8ab8ea7437c5e5809966eb54ecf"),
        hex!("01a33115c171b09d8022bf796829ad9ea33db3dbaba9543ec3a0fb9d37c2fcae"),
    ),
];
