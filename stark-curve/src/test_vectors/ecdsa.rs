//! ECDSA/STARK curve test vectors

use hex_literal::hex;

/// Signing test vector: private key `d`, public key `q_x`, nonce `k`,
/// message hash `m`, and the resulting signature `(r, s)`.
pub struct TestVector {
    /// Private key.
    pub d: [u8; 32],

    /// Public key (x-coordinate).
    pub q_x: [u8; 32],

    /// Nonce.
    pub k: [u8; 32],

    /// Message hash.
    pub m: [u8; 32],

    /// Signature `r` component.
    pub r: [u8; 32],

    /// Signature `s` component.
    pub s: [u8; 32],
}

/// Signatures with caller-supplied nonces.
pub const ECDSA_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        d: hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79"),
        q_x: hex!("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159"),
        k: hex!("04daebba599f860daee8f6e100601d98873052e1c61530c630cc4375c6bd48e3"),
        m: hex!("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76"),
        r: hex!("034ffbd2cd71fce104a13e8003bbd4a17aee31371a6fe72eff0efcd195f19ff3"),
        s: hex!("042e2665aca21934bca93eb1d589734759e58d43ee609514f05d608019d2711b"),
    },
    TestVector {
        d: hex!("06574075c4870acc416bf5548f1e15d6d001b1e449c956f6d5774b926e4cec3f"),
        q_x: hex!("0316a247262fc654ab83bfdb688e86f6311e3206b15fe981f9228cdb41267785"),
        k: hex!("05cd24b90dcc0fa9e86755e85293609aed7e5da8da43b5bd638b242da8ddb141"),
        m: hex!("02740a3390f3b826833dce96930b3069c80013f0c42231c0fbd18b42cd85bbc7"),
        r: hex!("007b84516ac0e63714bc56b81999b9c20a97c3e4c3cdecf4511692dec0b0e9a1"),
        s: hex!("0058c864f1aa1e8fe63848bb621b151ccab974ada912a663ab5702029b4d9309"),
    },
    TestVector {
        d: hex!("0620573bf68b60dbf6ae9779d5038ac480a5a21030ecedb0ef2aadbe1d83b04f"),
        q_x: hex!("00b03815e6ee3bda0f00fa2d83d15927f127d55f8e165b0db3091ea2a022df4a"),
        k: hex!("03f094c8e6e3535c889c0ca68651eab3d74363987a8cc92fd665fff4242b1497"),
        m: hex!("0625629c28865183b4884c26f6e5d4f5da6e374fb2a4c61b731c18a73de75b2a"),
        r: hex!("04774e308a23c707de14a1dd2b67a6e97024349e261ba1b68cca8d910775f35c"),
        s: hex!("07dd42a25602ab663c1b1a61341c0acad96402d19b8d7c9304df86aa7799933b"),
    },
];

/// Signatures with nonces derived per RFC 6979; `k` is the accepted nonce.
pub const RFC6979_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        d: hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79"),
        q_x: hex!("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159"),
        k: hex!("0738245b914bff42937b4cb377be9920abd5e8476e8998bfc74cb6cca4b9167f"),
        m: hex!("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76"),
        r: hex!("061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f"),
        s: hex!("04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a"),
    },
    TestVector {
        d: hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        q_x: hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        k: hex!("06cc139482f5e6243f0a53fb680077a4477f9dded79fbc68ba185a437dd68ec3"),
        m: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        r: hex!("005501cb3b19658d23128baf8bcfa2e45c12525b44eec10a3f485dbb40a82065"),
        s: hex!("02d67d973b258c5923ef085c7d9b9416ec146170865773aad9bffa2236500227"),
    },
    TestVector {
        d: hex!("031afd64c6578829484b3f21c6e3fc9bf74832873295a80e3e8fa3b08df22c88"),
        q_x: hex!("0236bcac6f438f1724075bdff649fadd939811a2cf21cd644d8b50a12ff625dc"),
        k: hex!("02122ad634975912e53775d1809b864a6248e88d44e102345454bf6ec4b348f0"),
        m: hex!("036f62e4bc44a8b396a925c9893effbf35e417b41dea59411ff96fc236ef477f"),
        r: hex!("0433911266622416243e8e1e63e898d569c4ff32c8f6dc4896fc26d8cd7b3751"),
        s: hex!("032b8980e93d020628f64db38911edf9b657b18059dfc911263a717ba55baf60"),
    },
    TestVector {
        d: hex!("00a54db2f4fb53f5e34a16b0a6773dc73cc9046dc59cc4eaddfe5fb14006eed3"),
        q_x: hex!("023f4ae987e451507621d3a5e38ae1e5bf6c9f0d98d7cf826164721c69b72c73"),
        k: hex!("00fd1d0e676adb4c71f136ce39549e1da6990328af015fd52ae53a5bf349e559"),
        m: hex!("0114e839b651c70b067602e359aa34b0890849563a3853883dec0f1c858fa775"),
        r: hex!("01bebd5dd5e1e2f92779cd4fee6422aa4fc16742c79a8dcce7a278a03198139c"),
        s: hex!("0737c068199179c2c570d100b893c565cfb37e7c4354c9e9624c38068720e13a"),
    },
];
